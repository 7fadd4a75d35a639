//! # Field Mutations
//!
//! Edits a user can make to a section's [`EditableContent`].
//!
//! ## Mutation Semantics
//!
//! ### SetField
//! - Atomic replacement of one declared field
//! - A list field can only be replaced by another list, a scalar field only
//!   by a scalar
//!
//! ### UpdateListItem
//! - Shallow merge of `{subfield: value}` into the item at `index`
//! - Out-of-range index fails; the list is never extended
//!
//! ### AppendListItem
//! - Pushes the item to the end of the list
//!
//! ### RemoveListItem
//! - Removes the item at `index`, keeping the relative order of the rest
//! - Every later item shifts down by one; indices held elsewhere are stale

use marquee_common::{find_field, EditableContent, FieldSpec};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Edit operations over section content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldMutation {
    /// Replace a scalar (or whole list) field
    SetField { field: String, value: Value },

    /// Merge one subfield into a list item
    UpdateListItem {
        list: String,
        index: usize,
        subfield: String,
        value: Value,
    },

    /// Append an item; `None` means "use the section's template"
    AppendListItem {
        list: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        item: Option<Value>,
    },

    /// Remove the item at `index`
    RemoveListItem { list: String, index: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Field is not a list: {0}")]
    NotAList(String),

    #[error("Field '{0}' is a list and can only be replaced by a list")]
    ExpectedList(String),

    #[error("Index {index} out of range for '{list}' (length {len})")]
    IndexOutOfRange {
        list: String,
        index: usize,
        len: usize,
    },

    #[error("Field '{0}' only accepts a string, number or boolean")]
    ExpectedScalar(String),

    #[error("Item {index} of '{list}' is not an object")]
    NotAnObject { list: String, index: usize },

    #[error("No item template for list '{0}'")]
    NoTemplate(String),
}

impl FieldMutation {
    /// Name of the field this mutation touches
    pub fn field(&self) -> &str {
        match self {
            FieldMutation::SetField { field, .. } => field,
            FieldMutation::UpdateListItem { list, .. }
            | FieldMutation::AppendListItem { list, .. }
            | FieldMutation::RemoveListItem { list, .. } => list,
        }
    }

    /// Resolve the touched field against a section layout.
    ///
    /// Keys outside the layout (including `${key}File` companions) are
    /// unknown, list operations need a list field, and `SetField` values
    /// must match the field's shape.
    pub fn check_layout<'f>(&self, fields: &'f [FieldSpec]) -> Result<&'f FieldSpec, MutationError> {
        let name = self.field();
        let spec = find_field(fields, name)
            .ok_or_else(|| MutationError::UnknownField(name.to_string()))?;

        match self {
            FieldMutation::SetField { value, .. } => {
                if spec.kind.is_list() {
                    if !value.is_array() {
                        return Err(MutationError::ExpectedList(name.to_string()));
                    }
                } else if value.is_array() || value.is_object() {
                    return Err(MutationError::ExpectedScalar(name.to_string()));
                }
            }
            _ if !spec.kind.is_list() => return Err(MutationError::NotAList(name.to_string())),
            _ => {}
        }
        Ok(spec)
    }

    /// Apply mutation to content with validation
    pub fn apply(&self, content: &mut EditableContent) -> Result<(), MutationError> {
        self.validate(content)?;

        match self {
            FieldMutation::SetField { field, value } => {
                content.set(field.as_str(), value.clone());
                Ok(())
            }

            FieldMutation::UpdateListItem {
                list,
                index,
                subfield,
                value,
            } => {
                let items = list_mut(content, list)?;
                let Some(Value::Object(item)) = items.get_mut(*index) else {
                    return Err(MutationError::NotAnObject {
                        list: list.clone(),
                        index: *index,
                    });
                };
                item.insert(subfield.clone(), value.clone());
                Ok(())
            }

            FieldMutation::AppendListItem { list, item } => {
                let item = item
                    .clone()
                    .ok_or_else(|| MutationError::NoTemplate(list.clone()))?;
                list_mut(content, list)?.push(item);
                Ok(())
            }

            FieldMutation::RemoveListItem { list, index } => {
                list_mut(content, list)?.remove(*index);
                Ok(())
            }
        }
    }

    /// Validate without applying
    pub fn validate(&self, content: &EditableContent) -> Result<(), MutationError> {
        match self {
            FieldMutation::SetField { field, value } => {
                let current = content
                    .get(field)
                    .ok_or_else(|| MutationError::UnknownField(field.clone()))?;

                if current.is_array() && !value.is_array() {
                    return Err(MutationError::ExpectedList(field.clone()));
                }
                Ok(())
            }

            FieldMutation::UpdateListItem { list, index, .. } => {
                let items = list_ref(content, list)?;
                check_index(list, *index, items.len())?;

                if !items[*index].is_object() {
                    return Err(MutationError::NotAnObject {
                        list: list.clone(),
                        index: *index,
                    });
                }
                Ok(())
            }

            FieldMutation::AppendListItem { list, item } => {
                list_ref(content, list)?;
                if item.is_none() {
                    return Err(MutationError::NoTemplate(list.clone()));
                }
                Ok(())
            }

            FieldMutation::RemoveListItem { list, index } => {
                let items = list_ref(content, list)?;
                check_index(list, *index, items.len())
            }
        }
    }
}

fn list_ref<'c>(content: &'c EditableContent, list: &str) -> Result<&'c Vec<Value>, MutationError> {
    if !content.contains(list) {
        return Err(MutationError::UnknownField(list.to_string()));
    }
    content
        .list(list)
        .ok_or_else(|| MutationError::NotAList(list.to_string()))
}

fn list_mut<'c>(
    content: &'c mut EditableContent,
    list: &str,
) -> Result<&'c mut Vec<Value>, MutationError> {
    content
        .list_mut(list)
        .ok_or_else(|| MutationError::NotAList(list.to_string()))
}

fn check_index(list: &str, index: usize, len: usize) -> Result<(), MutationError> {
    if index >= len {
        return Err(MutationError::IndexOutOfRange {
            list: list.to_string(),
            index,
            len,
        });
    }
    Ok(())
}
