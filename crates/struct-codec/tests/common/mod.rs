//! Resource shapes shaped like generated API client code.

#![allow(dead_code)]

use std::sync::OnceLock;

use json_struct_codec::{Extras, FieldDescriptor, Raw, Record, TypeDescriptor};

// ---------------------------------------------------------------------------
// AchTransfer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AchTransfer {
    pub id: Option<String>,
    pub account_id: Option<String>,
    pub amount: Option<i64>,
    pub status: Option<Raw>,
    pub created_at: Option<Raw>,
    pub standard_entry_class_code: Option<Raw>,
    pub addenda: Option<Vec<String>>,
    pub source: Option<TransferSource>,
    pub approvals: Option<Vec<Approval>>,
    pub extras: Extras,
}

impl Record for AchTransfer {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESCRIPTOR: OnceLock<TypeDescriptor<AchTransfer>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            TypeDescriptor::builder("AchTransfer")
                .field(FieldDescriptor::scalar("id", "id", |t: &Self| &t.id, |t| &mut t.id))
                .field(FieldDescriptor::scalar(
                    "account_id",
                    "account_id",
                    |t: &Self| &t.account_id,
                    |t| &mut t.account_id,
                ))
                .field(FieldDescriptor::scalar(
                    "amount",
                    "amount",
                    |t: &Self| &t.amount,
                    |t| &mut t.amount,
                ))
                .field(FieldDescriptor::scalar(
                    "status",
                    "status",
                    |t: &Self| &t.status,
                    |t| &mut t.status,
                ))
                .field(FieldDescriptor::scalar(
                    "created_at",
                    "created_at",
                    |t: &Self| &t.created_at,
                    |t| &mut t.created_at,
                ))
                .field(FieldDescriptor::scalar(
                    "standard_entry_class_code",
                    "standard_entry_class_code",
                    |t: &Self| &t.standard_entry_class_code,
                    |t| &mut t.standard_entry_class_code,
                ))
                .field(FieldDescriptor::scalar(
                    "addenda",
                    "addenda",
                    |t: &Self| &t.addenda,
                    |t| &mut t.addenda,
                ))
                .field(FieldDescriptor::object(
                    "source",
                    "source",
                    |t: &Self| &t.source,
                    |t| &mut t.source,
                ))
                .field(FieldDescriptor::object_list(
                    "approvals",
                    "approvals",
                    |t: &Self| &t.approvals,
                    |t| &mut t.approvals,
                ))
                .build()
        })
    }

    fn extras(&self) -> &Extras {
        &self.extras
    }

    fn extras_mut(&mut self) -> &mut Extras {
        &mut self.extras
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferSource {
    pub category: Option<Raw>,
    pub routing_number: Option<String>,
    pub amount: Option<i64>,
    pub extras: Extras,
}

impl Record for TransferSource {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESCRIPTOR: OnceLock<TypeDescriptor<TransferSource>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            TypeDescriptor::builder("TransferSource")
                .field(FieldDescriptor::scalar(
                    "category",
                    "category",
                    |t: &Self| &t.category,
                    |t| &mut t.category,
                ))
                .field(FieldDescriptor::scalar(
                    "routing_number",
                    "routing_number",
                    |t: &Self| &t.routing_number,
                    |t| &mut t.routing_number,
                ))
                .field(FieldDescriptor::scalar(
                    "amount",
                    "amount",
                    |t: &Self| &t.amount,
                    |t| &mut t.amount,
                ))
                .build()
        })
    }

    fn extras(&self) -> &Extras {
        &self.extras
    }

    fn extras_mut(&mut self) -> &mut Extras {
        &mut self.extras
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Approval {
    pub approved_by: Option<String>,
    pub approved_at: Option<Raw>,
    pub extras: Extras,
}

impl Record for Approval {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESCRIPTOR: OnceLock<TypeDescriptor<Approval>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            TypeDescriptor::builder("Approval")
                .field(FieldDescriptor::scalar(
                    "approved_by",
                    "approved_by",
                    |t: &Self| &t.approved_by,
                    |t| &mut t.approved_by,
                ))
                .field(FieldDescriptor::scalar(
                    "approved_at",
                    "approved_at",
                    |t: &Self| &t.approved_at,
                    |t| &mut t.approved_at,
                ))
                .build()
        })
    }

    fn extras(&self) -> &Extras {
        &self.extras
    }

    fn extras_mut(&mut self) -> &mut Extras {
        &mut self.extras
    }
}

// ---------------------------------------------------------------------------
// Account
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Account {
    pub id: Option<String>,
    pub name: Option<String>,
    pub interest_rate: Option<f64>,
    pub closed: Option<bool>,
    pub extras: Extras,
}

impl Record for Account {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESCRIPTOR: OnceLock<TypeDescriptor<Account>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            TypeDescriptor::builder("Account")
                .field(FieldDescriptor::scalar("id", "id", |t: &Self| &t.id, |t| &mut t.id))
                .field(FieldDescriptor::scalar(
                    "name",
                    "name",
                    |t: &Self| &t.name,
                    |t| &mut t.name,
                ))
                .field(FieldDescriptor::scalar(
                    "interest_rate",
                    "interest_rate",
                    |t: &Self| &t.interest_rate,
                    |t| &mut t.interest_rate,
                ))
                .field(FieldDescriptor::scalar(
                    "closed",
                    "closed",
                    |t: &Self| &t.closed,
                    |t| &mut t.closed,
                ))
                .build()
        })
    }

    fn extras(&self) -> &Extras {
        &self.extras
    }

    fn extras_mut(&mut self) -> &mut Extras {
        &mut self.extras
    }
}

// ---------------------------------------------------------------------------
// List filters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AchTransferListParams {
    pub cursor: Option<String>,
    pub limit: Option<i64>,
    pub account_id: Option<String>,
    pub created_at: Option<DateRange>,
    pub status: Option<StatusFilter>,
    pub source: Option<TransferSource>,
    pub idempotency_key: Option<String>,
    pub extras: Extras,
}

impl Record for AchTransferListParams {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESCRIPTOR: OnceLock<TypeDescriptor<AchTransferListParams>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            TypeDescriptor::builder("AchTransferListParams")
                .field(FieldDescriptor::scalar(
                    "cursor",
                    "cursor",
                    |t: &Self| &t.cursor,
                    |t| &mut t.cursor,
                ))
                .field(FieldDescriptor::scalar(
                    "limit",
                    "limit",
                    |t: &Self| &t.limit,
                    |t| &mut t.limit,
                ))
                .field(FieldDescriptor::scalar(
                    "account_id",
                    "account_id",
                    |t: &Self| &t.account_id,
                    |t| &mut t.account_id,
                ))
                .field(
                    FieldDescriptor::object(
                        "created_at",
                        "created_at",
                        |t: &Self| &t.created_at,
                        |t| &mut t.created_at,
                    )
                    .flatten_query(),
                )
                .field(
                    FieldDescriptor::object(
                        "status",
                        "status",
                        |t: &Self| &t.status,
                        |t| &mut t.status,
                    )
                    .flatten_query(),
                )
                .field(FieldDescriptor::object(
                    "source",
                    "source",
                    |t: &Self| &t.source,
                    |t| &mut t.source,
                ))
                .field(
                    FieldDescriptor::scalar(
                        "idempotency_key",
                        "idempotency_key",
                        |t: &Self| &t.idempotency_key,
                        |t| &mut t.idempotency_key,
                    )
                    .skip_query(),
                )
                .build()
        })
    }

    fn extras(&self) -> &Extras {
        &self.extras
    }

    fn extras_mut(&mut self) -> &mut Extras {
        &mut self.extras
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateRange {
    pub after: Option<Raw>,
    pub before: Option<Raw>,
    pub on_or_after: Option<Raw>,
    pub on_or_before: Option<Raw>,
    pub extras: Extras,
}

impl Record for DateRange {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESCRIPTOR: OnceLock<TypeDescriptor<DateRange>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            TypeDescriptor::builder("DateRange")
                .field(FieldDescriptor::scalar(
                    "after",
                    "after",
                    |t: &Self| &t.after,
                    |t| &mut t.after,
                ))
                .field(FieldDescriptor::scalar(
                    "before",
                    "before",
                    |t: &Self| &t.before,
                    |t| &mut t.before,
                ))
                .field(FieldDescriptor::scalar(
                    "on_or_after",
                    "on_or_after",
                    |t: &Self| &t.on_or_after,
                    |t| &mut t.on_or_after,
                ))
                .field(FieldDescriptor::scalar(
                    "on_or_before",
                    "on_or_before",
                    |t: &Self| &t.on_or_before,
                    |t| &mut t.on_or_before,
                ))
                .build()
        })
    }

    fn extras(&self) -> &Extras {
        &self.extras
    }

    fn extras_mut(&mut self) -> &mut Extras {
        &mut self.extras
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusFilter {
    pub in_: Option<Vec<Raw>>,
    pub extras: Extras,
}

impl Record for StatusFilter {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESCRIPTOR: OnceLock<TypeDescriptor<StatusFilter>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            TypeDescriptor::builder("StatusFilter")
                .field(FieldDescriptor::scalar(
                    "in_",
                    "in",
                    |t: &Self| &t.in_,
                    |t| &mut t.in_,
                ))
                .build()
        })
    }

    fn extras(&self) -> &Extras {
        &self.extras
    }

    fn extras_mut(&mut self) -> &mut Extras {
        &mut self.extras
    }
}

// ---------------------------------------------------------------------------
// Mutually recursive shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Category {
    pub name: Option<String>,
    pub group: Option<CategoryGroup>,
    pub extras: Extras,
}

impl Record for Category {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESCRIPTOR: OnceLock<TypeDescriptor<Category>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            TypeDescriptor::builder("Category")
                .field(FieldDescriptor::scalar(
                    "name",
                    "name",
                    |t: &Self| &t.name,
                    |t| &mut t.name,
                ))
                .field(
                    FieldDescriptor::object(
                        "group",
                        "group",
                        |t: &Self| &t.group,
                        |t| &mut t.group,
                    )
                    .flatten_query(),
                )
                .build()
        })
    }

    fn extras(&self) -> &Extras {
        &self.extras
    }

    fn extras_mut(&mut self) -> &mut Extras {
        &mut self.extras
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryGroup {
    pub label: Option<String>,
    pub categories: Option<Vec<Category>>,
    pub extras: Extras,
}

impl Record for CategoryGroup {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESCRIPTOR: OnceLock<TypeDescriptor<CategoryGroup>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            TypeDescriptor::builder("CategoryGroup")
                .field(FieldDescriptor::scalar(
                    "label",
                    "label",
                    |t: &Self| &t.label,
                    |t| &mut t.label,
                ))
                .field(FieldDescriptor::object_list(
                    "categories",
                    "categories",
                    |t: &Self| &t.categories,
                    |t| &mut t.categories,
                ))
                .build()
        })
    }

    fn extras(&self) -> &Extras {
        &self.extras
    }

    fn extras_mut(&mut self) -> &mut Extras {
        &mut self.extras
    }
}
