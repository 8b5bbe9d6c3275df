use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use tracing::{debug, error, info};

use crate::error::{Error, Result};
use crate::manifest::Manifest;
use crate::template;

/// File autoconf looks for (and writes) inside the resolved source directory.
const CONFIGURATION_FILE: &str = "configuration.ts";

/// Matches a declaration that already carries an imports field: an `imports`
/// token between `@Configuration(` and the class keyword.
static HAS_IMPORTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)@Configuration\(.*?imports.*?\sclass\s").expect("valid imports probe regex")
});

/// Matches a decorator call with no argument, e.g. `@Configuration()`.
static EMPTY_CALL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@Configuration\(\s*\)").expect("valid empty call regex"));

/// Matches the opening brace of the decorator's object argument.
static OPEN_BRACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@Configuration\(\{\s*").expect("valid open brace regex"));

/// Captures the bracketed contents of the imports array.
static IMPORTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)imports:\s*\[(.*?)\]").expect("valid imports array regex"));

/// Construction-time options for [`AutoConf`]. Unset fields fall back to the
/// conventions npm establishes while installing a package.
#[derive(Debug, Default)]
pub struct AutoConfOptions {
    /// Working directory of the plugin being installed.
    pub cwd: Option<PathBuf>,

    /// Module name to register; defaults to the plugin manifest's name.
    pub mod_name: Option<String>,

    /// Root of the consuming project; defaults to `$INIT_CWD`.
    pub base_dir: Option<PathBuf>,
}

/// Registers a plugin module into the host project's `configuration.ts`.
pub struct AutoConf {
    cwd: PathBuf,
    mod_name: String,
    base_dir: PathBuf,
}

impl AutoConf {
    pub fn new(options: AutoConfOptions) -> Result<Self> {
        let cwd = match options.cwd {
            Some(dir) => dir,
            None => env::current_dir()?,
        };
        let mod_name = match options.mod_name {
            Some(name) => name,
            None => Manifest::load(&cwd)?.name.unwrap_or_default(),
        };
        // npm sets INIT_CWD to the directory `npm install` was launched from.
        let base_dir = options
            .base_dir
            .or_else(|| env::var_os("INIT_CWD").map(PathBuf::from))
            .ok_or(Error::BaseDirUnset)?;

        Ok(Self {
            cwd,
            mod_name,
            base_dir,
        })
    }

    /// Patch the host project's configuration file. Running twice with the
    /// same module name leaves the file byte-identical.
    pub fn run(&self) -> Result<()> {
        // A package installing inside its own tree must not rewrite itself.
        if self.cwd == self.base_dir {
            debug!("cwd equals base dir, skipping {:?}", self.base_dir);
            return Ok(());
        }

        let Some(source_dir) = self.resolve_source_dir()? else {
            error!("cannot find source directory under {:?}", self.base_dir);
            return Ok(());
        };

        let configuration_file = source_dir.join(CONFIGURATION_FILE);
        let code = if configuration_file.exists() {
            fs::read_to_string(&configuration_file)?
        } else {
            let code = template::default_configuration();
            fs::write(&configuration_file, &code)?;
            code
        };

        fs::write(&configuration_file, self.insert_module(&code))?;
        info!("registered {:?} in {:?}", self.mod_name, configuration_file);
        Ok(())
    }

    /// Pick the directory holding `configuration.ts`: the host manifest's
    /// `tsCodeRoot` when present, then `src/apis`, then `src`.
    fn resolve_source_dir(&self) -> Result<Option<PathBuf>> {
        let mut candidates = vec![self.base_dir.join("src/apis"), self.base_dir.join("src")];
        let manifest = Manifest::load(&self.base_dir)?;
        if let Some(root) = manifest.midway_integration.and_then(|i| i.ts_code_root) {
            candidates.insert(0, self.base_dir.join(root));
        }
        Ok(candidates.into_iter().find(|dir| dir.is_dir()))
    }

    fn insert_module(&self, code: &str) -> String {
        // A file without the decorator is reset to the default template.
        let mut code = if code.contains("@Configuration") {
            code.to_string()
        } else {
            template::default_configuration()
        };
        if !HAS_IMPORTS_RE.is_match(&code) {
            code = add_imports_field(&code);
        }
        self.add_module(&code)
    }

    /// Append `mod_name` to the imports array unless it is already listed.
    /// Prior entries keep their relative order; the whole array literal is
    /// re-serialized as single-quoted, comma-and-space-joined entries.
    fn add_module(&self, code: &str) -> String {
        let Some(caps) = IMPORTS_RE.captures(code) else {
            return code.to_string();
        };
        let inner = caps.get(1).map_or("", |m| m.as_str());
        let mut mods: Vec<&str> = inner
            .split(',')
            .map(|entry| entry.trim().trim_matches(|c| c == '\'' || c == '"'))
            .filter(|entry| !entry.is_empty())
            .collect();
        if mods.iter().any(|m| *m == self.mod_name) {
            return code.to_string();
        }
        mods.push(&self.mod_name);

        let joined = mods
            .iter()
            .map(|m| format!("'{m}'"))
            .collect::<Vec<_>>()
            .join(", ");
        IMPORTS_RE
            .replacen(code, 1, NoExpand(&format!("imports: [{joined}]")))
            .into_owned()
    }
}

/// Inject an empty `imports: [],` field right after the object argument's
/// opening brace, normalizing a bare `@Configuration()` call first.
fn add_imports_field(code: &str) -> String {
    let code = EMPTY_CALL_RE.replace_all(code, "@Configuration({})");
    OPEN_BRACE_RE
        .replacen(&code, 1, "@Configuration({\n    imports: [],")
        .into_owned()
}
