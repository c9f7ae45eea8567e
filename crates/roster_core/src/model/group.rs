//! Group entity and the membership-carrying snapshot payload.

use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
}

/// One entry of a `groups.json` snapshot: the group itself plus the ids of
/// the students to link to it after the group row is inserted.
///
/// Exists only inside import payloads; membership is persisted as link rows,
/// not as part of the group entity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkedGroup {
    #[serde(flatten)]
    pub group: Group,
    #[serde(default)]
    pub students: Vec<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::LinkedGroup;

    #[test]
    fn linked_group_decodes_flattened_fields_and_members() {
        let linked: LinkedGroup = serde_json::from_str(
            r#"{
                "id": "00000000-0000-4000-8000-000000000007",
                "name": "7B",
                "students": [
                    "00000000-0000-4000-8000-000000000001",
                    "00000000-0000-4000-8000-000000000002"
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(linked.group.name, "7B");
        assert_eq!(linked.students.len(), 2);
    }

    #[test]
    fn linked_group_without_students_decodes_as_empty() {
        let linked: LinkedGroup = serde_json::from_str(
            r#"{"id": "00000000-0000-4000-8000-000000000007", "name": "7B"}"#,
        )
        .unwrap();

        assert!(linked.students.is_empty());
    }
}
