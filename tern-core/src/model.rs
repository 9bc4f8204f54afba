use crate::{OrmError, Result};
use std::collections::HashMap;

/// Table mapping of one record type.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Model {
    pub(crate) table_name: String,
    pub(crate) fields: HashMap<String, Field>,
}

impl Model {
    /// Model with the given table name and `(field, column)` pairs.
    pub fn new<F, C>(
        table_name: impl Into<String>,
        fields: impl IntoIterator<Item = (F, C)>,
    ) -> Self
    where
        F: Into<String>,
        C: Into<String>,
    {
        Self {
            table_name: table_name.into(),
            fields: fields
                .into_iter()
                .map(|(f, c)| (f.into(), Field::new(c)))
                .collect(),
        }
    }
    /// Resolved table name, it can be empty when a customization cleared it.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
    /// Fields keyed by their identifier.
    pub fn fields(&self) -> &HashMap<String, Field> {
        &self.fields
    }
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }
    /// Column of the field `name`, fails with [`OrmError::UnknownField`].
    pub fn column_name(&self, name: &str) -> Result<&str> {
        self.fields
            .get(name)
            .map(Field::column_name)
            .ok_or_else(|| OrmError::UnknownField(name.into()).into())
    }
}

/// Column mapping of one struct member.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub(crate) column_name: String,
}

impl Field {
    pub fn new(column_name: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
        }
    }
    pub fn column_name(&self) -> &str {
        &self.column_name
    }
}

/// Customization applied to a [`Model`] while it is being registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelOpt {
    /// Replaces the table name, the empty string included.
    TableName(String),
    /// Replaces the column name of an existing field.
    ColumnName { field: String, column: String },
}

impl ModelOpt {
    pub fn table_name(name: impl Into<String>) -> Self {
        ModelOpt::TableName(name.into())
    }
    pub fn column_name(field: impl Into<String>, column: impl Into<String>) -> Self {
        ModelOpt::ColumnName {
            field: field.into(),
            column: column.into(),
        }
    }
    pub(crate) fn apply(&self, model: &mut Model) -> Result<()> {
        match self {
            ModelOpt::TableName(name) => model.table_name = name.clone(),
            ModelOpt::ColumnName { field, column } => {
                let Some(target) = model.fields.get_mut(field) else {
                    return Err(OrmError::UnknownField(field.clone()).into());
                };
                target.column_name = column.clone();
            }
        }
        Ok(())
    }
}
