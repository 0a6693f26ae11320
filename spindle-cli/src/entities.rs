//! Sample entities rendered by the CLI.

use chrono::{DateTime, Utc};
use spindle::types::{NullDate, NullString};
use spindle::{Entity, Index, KeyPart, PrimaryKey, Record};

#[derive(Record, Default)]
#[rename_all = "PascalCase"]
pub struct User {
    #[column_name = "ID"]
    pub id: u64,
    pub name: String,
    pub token: String,
    #[tag(db = "nullable")]
    pub borned_date: NullDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for User {
    fn table_name(&self) -> String {
        "User".to_string()
    }

    fn primary_key(&self) -> PrimaryKey {
        PrimaryKey::new([KeyPart::asc("ID")])
    }
}

#[derive(Record, Default)]
#[rename_all = "PascalCase"]
pub struct Entry {
    #[column_name = "ID"]
    pub id: i32,
    pub title: String,
    pub public: bool,
    #[tag(db = "size=1048576")]
    pub content: Box<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Entry {
    fn table_name(&self) -> String {
        "Entry".to_string()
    }

    fn primary_key(&self) -> PrimaryKey {
        PrimaryKey::with_interleave("User", [KeyPart::asc("ID"), KeyPart::desc("CreatedAt")])
    }

    fn indexes(&self) -> Vec<Index> {
        vec![Index::new("EntryByTitle", "Entry", false, [KeyPart::asc("Title")])]
    }
}

#[derive(Record, Default)]
#[rename_all = "PascalCase"]
pub struct PlayerComment {
    #[column_name = "ID"]
    #[tag(json = "id")]
    pub id: i32,
    #[column_name = "PlayerID"]
    #[tag(json = "player_id")]
    pub player_id: i32,
    #[column_name = "EntryID"]
    #[tag(json = "entry_id")]
    pub entry_id: i32,
    #[tag(db = "size:99, nullable", json = "comment")]
    pub comment: NullString,
    #[tag(json = "created_at")]
    pub created_at: DateTime<Utc>,
}

impl Entity for PlayerComment {
    fn table_name(&self) -> String {
        "PlayerComment".to_string()
    }

    fn primary_key(&self) -> PrimaryKey {
        PrimaryKey::new([KeyPart::asc("ID")])
    }

    fn indexes(&self) -> Vec<Index> {
        vec![Index::new(
            "PlayerCommentByPlayerIDCommentNullFiltered",
            "PlayerComment",
            true,
            [KeyPart::asc("PlayerID"), KeyPart::asc("Comment")],
        )]
    }
}

#[derive(Record, Default)]
#[rename_all = "PascalCase"]
pub struct Bookmark {
    #[column_name = "ID"]
    pub id: String,
    #[column_name = "UserID"]
    pub user_id: i32,
    #[column_name = "EntryID"]
    pub entry_id: i32,
    #[tag(db = "-")]
    pub ignore: String,
    pub comments: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Bookmark {
    fn table_name(&self) -> String {
        "Bookmark".to_string()
    }

    fn primary_key(&self) -> PrimaryKey {
        PrimaryKey::new([KeyPart::asc("ID")])
    }

    fn indexes(&self) -> Vec<Index> {
        vec![Index::unique(
            "BookmarkByUserIDEntryID",
            "Bookmark",
            false,
            [KeyPart::asc("UserID"), KeyPart::desc("EntryID")],
        )]
    }
}

/// Protobuf-style enum stored as its number.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyId(pub i32);

impl spindle::FieldType for CurrencyId {
    fn type_info() -> spindle::TypeInfo {
        <i32 as spindle::FieldType>::type_info()
    }
}

#[derive(Record, Default)]
#[rename_all = "PascalCase"]
pub struct Balance {
    #[column_name = "ID"]
    pub id: String,
    #[column_name = "UserID"]
    pub user_id: String,
    #[column_name = "CurrencyID"]
    pub currency_id: CurrencyId,
    pub amount: f64,
}

impl Entity for Balance {
    fn table_name(&self) -> String {
        "Balance".to_string()
    }

    fn primary_key(&self) -> PrimaryKey {
        PrimaryKey::new([KeyPart::asc("ID")])
    }

    fn indexes(&self) -> Vec<Index> {
        vec![Index::unique(
            "BalanceByUserIDCurrencyID",
            "Balance",
            false,
            [KeyPart::asc("UserID"), KeyPart::asc("CurrencyID")],
        )]
    }
}

#[derive(Record, Default)]
#[rename_all = "PascalCase"]
pub struct NestChild1 {
    pub child1_name: String,
}

#[derive(Record, Default)]
#[rename_all = "PascalCase"]
pub struct NestChild2 {
    pub child2_name: String,
}

#[derive(Record, Default)]
#[rename_all = "PascalCase"]
pub struct NestParent {
    #[column_name = "ID"]
    pub id: i64,
    pub nest_child1: Box<NestChild1>,
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

/// Every sample entity, in output order.
pub fn all() -> Vec<Box<dyn Entity>> {
    vec![
        Box::new(User::default()),
        Box::new(Entry::default()),
        Box::new(PlayerComment::default()),
        Box::new(Bookmark::default()),
        Box::new(Balance::default()),
        Box::new(NestParent::default()),
    ]
}
