/// Default configuration source written when the host project has none:
/// an empty `@Configuration` declaration with no imports.
pub fn default_configuration() -> String {
    r#"import { Configuration } from '@midwayjs/decorator';
@Configuration({})
export class ContainerConfiguration {}"#
        .to_string()
}
