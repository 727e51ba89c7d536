use serde::{Deserialize, Serialize};

use crate::domain::types::{CompanyId, CompanyName};

/// A company owning zero or more products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Company {
    pub id: CompanyId,
    pub name: CompanyName,
}

/// Information required to create a new [`Company`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCompany {
    pub name: CompanyName,
}
