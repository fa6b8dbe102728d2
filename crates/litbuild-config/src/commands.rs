//! Command extraction from document sections.

use litbuild_core::{CommandScope, Value};

/// Extract the commands of `value` that apply to `scope`, in document order.
///
/// Scalars are single commands. Sequences concatenate their elements.
/// Mappings are environment-keyed: entries whose key is one of the target
/// environment's labels recurse, the rest are skipped. Under
/// [`CommandScope::Any`] a mapping contributes nothing — an
/// environment-specific command without an environment is ignored.
pub fn extract(value: &Value, scope: CommandScope<'_>) -> Vec<String> {
    let mut commands = Vec::new();
    collect(value, scope, &mut commands);
    commands
}

fn collect(value: &Value, scope: CommandScope<'_>, commands: &mut Vec<String>) {
    match value {
        Value::Scalar(command) => commands.push(command.clone()),
        Value::Sequence(elements) => {
            for element in elements {
                collect(element, scope, commands);
            }
        }
        Value::Mapping(map) => {
            if let CommandScope::Env(environment) = scope {
                for (label, child) in map {
                    if environment.matches(label) {
                        collect(child, scope, commands);
                    }
                }
            }
        }
    }
}
