use diesel::prelude::*;

use crate::domain::company::{Company as DomainCompany, NewCompany as DomainNewCompany};
use crate::domain::types::{CompanyId, CompanyName, TypeConstraintError};

/// Diesel model representing the `companies` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::companies)]
pub struct Company {
    pub id: i32,
    pub name: String,
}

impl TryFrom<Company> for DomainCompany {
    type Error = TypeConstraintError;

    fn try_from(company: Company) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CompanyId::new(company.id)?,
            name: CompanyName::new(company.name)?,
        })
    }
}

/// Insertable form of [`Company`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::companies)]
pub struct NewCompany {
    pub name: String,
}

impl From<&DomainNewCompany> for NewCompany {
    fn from(company: &DomainNewCompany) -> Self {
        Self {
            name: company.name.as_str().to_string(),
        }
    }
}
