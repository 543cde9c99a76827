use super::convert;
use crate::models::{ResourceQuery, ResourceQueryParam, ResourceQueryRecord};

convert! {
    ResourceQueryParam {
        "name" => name,
        "value" => value,
        "description" => description,
    }
}

convert! {
    ResourceQuery {
        "query_type" => query_type,
        "query_condition" => query_condition: blocks,
        "query_select" => query_select,
    }
}

convert! {
    ResourceQueryRecord {
        "name" => name,
        "type" => kind,
        "queries" => queries: blocks,
    }
    computed {
        "created_at" => created_at,
        "created_by" => created_by,
        "updated_at" => updated_at,
        "updated_by" => updated_by,
    }
}

#[cfg(test)]
mod tests {
    use schematics_core::resource::Value;

    use crate::convert::{Expand, Flatten};
    use crate::models::ResourceQueryRecord;

    #[test]
    fn nested_conditions_keep_order() {
        let record: ResourceQueryRecord = serde_json::from_value(serde_json::json!({
            "id": "q-1",
            "name": "vsi",
            "type": "vsi",
            "queries": [{
                "query_type": "workspaces",
                "query_condition": [
                    {"name": "workspace-id", "value": "ws-1"},
                    {"name": "resource-type", "value": "ibm_is_instance"}
                ],
                "query_select": ["ipv4_address"]
            }]
        }))
        .unwrap();

        let map = record.flatten();
        assert_eq!(map.get("type"), Some(&Value::String("vsi".to_string())));

        let query = ResourceQueryRecord::expand(&map)
            .queries
            .and_then(|q| q.into_iter().next())
            .unwrap();
        let names: Vec<_> = query
            .query_condition
            .unwrap()
            .into_iter()
            .filter_map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["workspace-id", "resource-type"]);
    }
}
