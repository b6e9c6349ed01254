use serde::{Deserialize, Deserializer, Serialize};

pub type ItemId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
}

/// Request body for create and update.
///
/// Missing or `null` `name`/`description` decode to empty strings. A client supplied
/// `id` is type checked but never used: the store assigns ids on create and the path id
/// wins on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ItemDraft {
    #[serde(default, alias = "ID", alias = "Id")]
    pub id: Option<ItemId>,
    #[serde(default, alias = "Name", deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, alias = "Description", deserialize_with = "null_as_empty")]
    pub description: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Item {
    pub fn from_draft(id: ItemId, draft: ItemDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
        }
    }
}
