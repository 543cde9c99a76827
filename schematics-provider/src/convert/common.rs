use super::convert;
use crate::models::{
    ActionState, BastionResourceDefinition, CatalogSource, CredentialVariableData,
    CredentialVariableMetadata, ExternalSource, GitSource, SystemLock, UserState, VariableData,
    VariableMetadata,
};

convert! {
    VariableMetadata {
        "type" => kind,
        "aliases" => aliases,
        "description" => description,
        "cloud_data_type" => cloud_data_type,
        "default_value" => default_value,
        "link_status" => link_status,
        "secure" => secure,
        "immutable" => immutable,
        "hidden" => hidden,
        "required" => required,
        "options" => options,
        "min_value" => min_value,
        "max_value" => max_value,
        "min_length" => min_length,
        "max_length" => max_length,
        "matches" => matches,
        "position" => position,
        "group_by" => group_by,
        "source" => source,
    }
}

convert! {
    VariableData {
        "name" => name,
        "value" => value,
        "use_default" => use_default,
        "metadata" => metadata: block,
    }
    computed {
        "link" => link,
    }
}

convert! {
    CredentialVariableMetadata {
        "type" => kind,
        "aliases" => aliases,
        "description" => description,
        "default_value" => default_value,
        "immutable" => immutable,
        "hidden" => hidden,
        "position" => position,
        "group_by" => group_by,
        "source" => source,
    }
}

convert! {
    CredentialVariableData {
        "name" => name,
        "value" => value,
        "use_default" => use_default,
        "metadata" => metadata: block,
    }
    computed {
        "link" => link,
    }
}

convert! {
    BastionResourceDefinition {
        "name" => name,
        "host" => host,
    }
}

convert! {
    GitSource {
        "computed_git_repo_url" => computed_git_repo_url,
        "git_repo_url" => git_repo_url,
        "git_token" => git_token,
        "git_repo_folder" => git_repo_folder,
        "git_release" => git_release,
        "git_branch" => git_branch,
    }
}

convert! {
    CatalogSource {
        "catalog_name" => catalog_name,
        "offering_name" => offering_name,
        "offering_version" => offering_version,
        "offering_kind" => offering_kind,
        "offering_id" => offering_id,
        "offering_version_id" => offering_version_id,
        "offering_repo_url" => offering_repo_url,
    }
}

convert! {
    ExternalSource {
        "source_type" => source_type,
        "git" => git: block,
        "catalog" => catalog: block,
    }
}

convert! {
    UserState {
        "state" => state,
        "set_by" => set_by,
        "set_at" => set_at,
    }
}

convert! {
    SystemLock {
        "sys_locked" => sys_locked,
        "sys_locked_by" => sys_locked_by,
        "sys_locked_at" => sys_locked_at,
    }
}

convert! {
    ActionState {
        "status_code" => status_code,
        "status_job_id" => status_job_id,
        "status_message" => status_message,
    }
}

#[cfg(test)]
mod tests {
    use schematics_core::resource::Value;

    use crate::convert::{AttrMap, Expand, Flatten};
    use crate::models::{ExternalSource, GitSource, VariableData, VariableMetadata};

    fn s(v: &str) -> Value {
        Value::String(v.to_string())
    }

    #[test]
    fn variable_round_trip() {
        let mut metadata = AttrMap::new();
        metadata.insert("type".to_string(), s("string"));
        metadata.insert("secure".to_string(), Value::Bool(true));
        metadata.insert("position".to_string(), Value::Int(2));
        metadata.insert(
            "options".to_string(),
            Value::List(vec![s("small"), s("large")]),
        );

        let mut map = AttrMap::new();
        map.insert("name".to_string(), s("region"));
        map.insert("value".to_string(), s("us-south"));
        map.insert("use_default".to_string(), Value::Bool(false));
        map.insert(
            "metadata".to_string(),
            Value::List(vec![Value::Map(metadata)]),
        );

        let var = VariableData::expand(&map);
        assert_eq!(var.metadata.as_ref().and_then(|m| m.position), Some(2));
        assert_eq!(var.flatten(), map);
    }

    #[test]
    fn link_is_flattened_but_not_expanded() {
        let var = VariableData {
            name: Some("x".to_string()),
            link: Some("ref://other".to_string()),
            ..Default::default()
        };
        let map = var.flatten();
        assert_eq!(map.get("link"), Some(&s("ref://other")));
        assert!(VariableData::expand(&map).link.is_none());
    }

    #[test]
    fn nested_objects_flatten_to_single_element_lists() {
        let source = ExternalSource {
            source_type: Some("git_hub".to_string()),
            git: Some(GitSource {
                git_repo_url: Some("https://github.com/org/repo".to_string()),
                ..Default::default()
            }),
            catalog: None,
        };
        let map = source.flatten();
        let git = map.get("git").and_then(Value::as_list).unwrap();
        assert_eq!(git.len(), 1);
        assert!(!map.contains_key("catalog"));
        assert_eq!(ExternalSource::expand(&map), source);
    }

    #[test]
    fn metadata_type_key_maps_to_kind() {
        let metadata = VariableMetadata {
            kind: Some("list(string)".to_string()),
            ..Default::default()
        };
        assert_eq!(metadata.flatten().get("type"), Some(&s("list(string)")));
    }
}
