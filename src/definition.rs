//! Definition rows: `LogicalName,PhysicalName,DataType,RequiredFlag`.

use crate::case;
use crate::model::{DataType, PropertySpec, Skip};

pub const FIELD_COUNT: usize = 4;

const LOGICAL_NAME: usize = 0;
const PHYSICAL_NAME: usize = 1;
const DATA_TYPE: usize = 2;
const REQUIRED: usize = 3;

/// Splits a raw line on `,` and builds a spec from it.
pub fn parse_row(line: &str, snake_to_pascal: bool) -> Result<PropertySpec, Skip> {
    let fields: Vec<&str> = line.split(',').collect();
    PropertySpec::from_fields(&fields, snake_to_pascal)
}

/// Anything containing `y` (case-insensitive) marks the field as required.
pub fn is_required(flag: &str) -> bool {
    flag.trim().to_lowercase().contains('y')
}

impl PropertySpec {
    /// Fields past the fourth are ignored.
    pub fn from_fields<S: AsRef<str>>(fields: &[S], snake_to_pascal: bool) -> Result<Self, Skip> {
        if fields.len() < FIELD_COUNT {
            return Err(Skip::ShortRow);
        }

        let raw_type = fields[DATA_TYPE].as_ref().trim();
        let data_type = DataType::resolve(raw_type);
        if data_type == DataType::Unsupported {
            return Err(Skip::UnsupportedType(raw_type.to_string()));
        }

        let physical = fields[PHYSICAL_NAME].as_ref().trim();
        let physical_name = if snake_to_pascal {
            case::snake_to_pascal(&case::to_lower(physical))
        } else {
            physical.to_string()
        };

        Ok(Self {
            logical_name: fields[LOGICAL_NAME].as_ref().trim().to_string(),
            physical_name,
            data_type,
            required: is_required(fields[REQUIRED].as_ref()),
        })
    }

    /// A bare name rendered as a declaration: always a required string with
    /// no logical name.
    pub fn name_only(name: impl Into<String>) -> Self {
        Self {
            logical_name: String::new(),
            physical_name: name.into(),
            data_type: DataType::String,
            required: true,
        }
    }
}
