use super::convert;
use crate::models::Action;

convert! {
    Action {
        "name" => name,
        "description" => description,
        "location" => location,
        "resource_group" => resource_group,
        "tags" => tags,
        "user_state" => user_state: block,
        "source_readme_url" => source_readme_url,
        "source" => source: block,
        "source_type" => source_type,
        "command_parameter" => command_parameter,
        "inventory" => inventory,
        "credentials" => credentials: blocks,
        "bastion" => bastion: block,
        "bastion_credential" => bastion_credential: block,
        "targets_ini" => targets_ini,
        "action_inputs" => inputs: blocks,
        "action_outputs" => outputs: blocks,
        "settings" => settings: blocks,
    }
    computed {
        "crn" => crn,
        "account" => account,
        "state" => state: block,
        "playbook_names" => playbook_names,
        "sys_lock" => sys_lock: block,
        "source_created_at" => source_created_at,
        "source_created_by" => source_created_by,
        "source_updated_at" => source_updated_at,
        "source_updated_by" => source_updated_by,
        "created_at" => created_at,
        "created_by" => created_by,
        "updated_at" => updated_at,
        "updated_by" => updated_by,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use schematics_core::resource::Value;

    use crate::convert::{AttrMap, Expand, Flatten};
    use crate::models::{Action, ExternalSource, GitSource, SystemLock, VariableData};

    fn s(v: &str) -> Value {
        Value::String(v.to_string())
    }

    fn sample() -> Action {
        Action {
            id: Some("us-south.ACTION.demo.1a2b".to_string()),
            name: Some("demo".to_string()),
            tags: Some(vec!["env:dev".to_string(), "team:ops".to_string()]),
            source: Some(ExternalSource {
                source_type: Some("git_hub".to_string()),
                git: Some(GitSource {
                    git_repo_url: Some("https://github.com/org/playbooks".to_string()),
                    ..Default::default()
                }),
                catalog: None,
            }),
            inputs: Some(vec![
                VariableData {
                    name: Some("first".to_string()),
                    ..Default::default()
                },
                VariableData {
                    name: Some("second".to_string()),
                    ..Default::default()
                },
            ]),
            sys_lock: Some(SystemLock {
                sys_locked: Some(false),
                ..Default::default()
            }),
            created_at: Some(Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn flatten_uses_attribute_names() {
        let map = sample().flatten();
        assert_eq!(map.get("name"), Some(&s("demo")));
        assert_eq!(map.get("created_at"), Some(&s("2024-05-06T07:08:09.000Z")));
        assert!(map.contains_key("action_inputs"));
        assert!(!map.contains_key("inputs"));
        assert!(!map.contains_key("description"));
        assert!(!map.contains_key("user_state"));
        assert!(!map.contains_key("id"));
    }

    #[test]
    fn input_order_is_preserved() {
        let map = sample().flatten();
        let inputs = map.get("action_inputs").and_then(Value::as_list).unwrap();
        let names: Vec<_> = inputs
            .iter()
            .filter_map(|v| v.as_map())
            .filter_map(|m| m.get("name").and_then(Value::as_str))
            .collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn expand_drops_computed_fields() {
        let action = Action::expand(&sample().flatten());
        assert_eq!(action.name.as_deref(), Some("demo"));
        assert!(action.sys_lock.is_none());
        assert!(action.created_at.is_none());
        assert!(action.id.is_none());
        assert_eq!(action.inputs.map(|v| v.len()), Some(2));
    }

    #[test]
    fn writable_attributes_round_trip() {
        let mut map = AttrMap::new();
        map.insert("name".to_string(), s("demo"));
        map.insert("description".to_string(), s("runs playbooks"));
        map.insert("tags".to_string(), Value::List(vec![s("b"), s("a")]));
        map.insert("targets_ini".to_string(), s("[web]\nhost1"));
        let mut bastion = AttrMap::new();
        bastion.insert("name".to_string(), s("jump"));
        bastion.insert("host".to_string(), s("10.1.1.1"));
        map.insert("bastion".to_string(), Value::List(vec![Value::Map(bastion)]));

        assert_eq!(Action::expand(&map).flatten(), map);
    }
}
