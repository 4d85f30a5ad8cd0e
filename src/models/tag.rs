use serde::{Deserialize, Serialize};

#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[sqlx(type_name = "text")]
pub enum TagKind {
    Monuments,
    Museums,
    #[serde(rename = "Religious Sites")]
    #[sqlx(rename = "Religious Sites")]
    ReligiousSites,
    #[serde(rename = "Palaces/Castles")]
    #[sqlx(rename = "Palaces/Castles")]
    PalacesCastles,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MuseumTag {
    pub id: i32,
    pub kind: TagKind,
    pub historical_period: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PreferenceTag {
    pub id: i32,
    pub name: String,
    pub description: String,
}
