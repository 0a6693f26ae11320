//! Record fixtures shared by the integration tests.
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use spindle::types::NullString;
use spindle::{Entity, FieldInfo, FieldType, Index, KeyPart, PrimaryKey, Record, TypeInfo};

#[derive(Record, Default)]
#[rename_all = "PascalCase"]
pub struct Test1 {
    #[column_name = "ID"]
    pub id: u64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Test1 {
    fn table_name(&self) -> String {
        "Test1".to_string()
    }

    fn primary_key(&self) -> PrimaryKey {
        PrimaryKey::new([KeyPart::asc("ID")])
    }

    fn indexes(&self) -> Vec<Index> {
        vec![Index::new(
            "Test1ByCreatedAtDesc",
            "Test1",
            false,
            [KeyPart::desc("CreatedAt")],
        )]
    }
}

#[derive(Record, Default)]
#[rename_all = "PascalCase"]
pub struct Test2 {
    #[column_name = "ID"]
    pub id: u64,
    #[column_name = "Test1ID"]
    pub test1_id: u64,
    #[tag(db = "size=1024")]
    pub comment: NullString,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Test2 {
    fn table_name(&self) -> String {
        "Test2".to_string()
    }

    fn primary_key(&self) -> PrimaryKey {
        PrimaryKey::with_interleave("Test1", [KeyPart::asc("ID"), KeyPart::desc("CreatedAt")])
    }
}

#[derive(Record, Default)]
#[rename_all = "PascalCase"]
pub struct Bookmark {
    #[column_name = "ID"]
    pub id: String,
    #[column_name = "UserID"]
    pub user_id: i32,
    #[tag(db = "-")]
    pub ignore: String,
    pub comments: Vec<String>,
}

impl Entity for Bookmark {
    fn table_name(&self) -> String {
        "Bookmark".to_string()
    }

    fn primary_key(&self) -> PrimaryKey {
        PrimaryKey::new([KeyPart::asc("ID")])
    }

    fn indexes(&self) -> Vec<Index> {
        vec![
            Index::unique("BookmarkByUserID", "Bookmark", false, [KeyPart::asc("UserID")]),
            Index::new("BookmarkByComments", "Bookmark", true, [KeyPart::asc("Comments")]),
        ]
    }
}

#[derive(Record, Default)]
#[rename_all = "PascalCase"]
pub struct NestChild1 {
    pub child1_name: String,
    #[tag(db = "nullable")]
    pub child1_score: i64,
}

#[derive(Record, Default)]
#[rename_all = "PascalCase"]
pub struct NestChild2 {
    #[tag(db = "size=16")]
    pub child2_code: String,
}

#[derive(Record, Default)]
#[rename_all = "PascalCase"]
pub struct NestParent {
    #[column_name = "ID"]
    pub id: i64,
    pub nest_child1: Box<NestChild1>,
    pub parent_name: String,
    pub nest_child2: Box<NestChild2>,
}

impl Entity for NestParent {
    fn table_name(&self) -> String {
        "NestParent".to_string()
    }

    fn primary_key(&self) -> PrimaryKey {
        PrimaryKey::new([KeyPart::asc("ID")])
    }
}

#[derive(Record, Default)]
#[rename_all = "PascalCase"]
pub struct Broken {
    #[column_name = "ID"]
    pub id: i64,
    #[tag(db = "size=big")]
    pub body: String,
}

impl Entity for Broken {
    fn table_name(&self) -> String {
        "Broken".to_string()
    }

    fn primary_key(&self) -> PrimaryKey {
        PrimaryKey::new([KeyPart::asc("ID")])
    }
}

/// Embeds itself through a pointer; no value of it can exist, so the
/// descriptor is a unit struct with hand-written field metadata.
#[derive(Default)]
pub struct SelfEmbed;

impl Record for SelfEmbed {
    const NAME: &'static str = "SelfEmbed";

    fn fields() -> Vec<FieldInfo> {
        vec![
            FieldInfo::new("ID", &[], i64::type_info()),
            FieldInfo::new("Next", &[], Box::<SelfEmbed>::type_info()),
        ]
    }
}

impl FieldType for SelfEmbed {
    fn type_info() -> TypeInfo {
        TypeInfo::Record(SelfEmbed::shape())
    }
}

impl Entity for SelfEmbed {
    fn table_name(&self) -> String {
        "SelfEmbed".to_string()
    }

    fn primary_key(&self) -> PrimaryKey {
        PrimaryKey::new([KeyPart::asc("ID")])
    }
}

/// Field metadata that panics when walked.
#[derive(Default)]
pub struct Exploding;

impl Record for Exploding {
    const NAME: &'static str = "Exploding";

    fn fields() -> Vec<FieldInfo> {
        panic!("field metadata unavailable")
    }
}

impl Entity for Exploding {
    fn table_name(&self) -> String {
        "Exploding".to_string()
    }

    fn primary_key(&self) -> PrimaryKey {
        PrimaryKey::new([KeyPart::asc("ID")])
    }
}
