//! Property descriptors tell the host which widget to show for a script
//! parameter and which functions to bind it to. On the wire they are a single
//! `key:value|key:value` string, e.g.
//! `name:freq|type:range|display:Frequency|values:2,10|write:setFreq|read:getFreq`.

use std::fmt;
use std::str::FromStr;

use crate::error::StrobeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Range,
    List,
    Integer,
    String,
}

impl WidgetKind {
    fn as_str(&self) -> &'static str {
        match self {
            WidgetKind::Range => "range",
            WidgetKind::List => "list",
            WidgetKind::Integer => "integer",
            WidgetKind::String => "string",
        }
    }
}

impl FromStr for WidgetKind {
    type Err = StrobeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "range" => Ok(WidgetKind::Range),
            "list" => Ok(WidgetKind::List),
            "integer" => Ok(WidgetKind::Integer),
            "string" => Ok(WidgetKind::String),
            other => Err(StrobeError::MalformedDescriptor(format!(
                "unknown widget type {:?}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValues {
    None,
    Range { min: i64, max: i64 },
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub name: String,
    pub kind: WidgetKind,
    pub display: String,
    pub values: PropertyValues,
    pub write: String,
    pub read: String,
}

impl PropertyDescriptor {
    pub fn range(
        name: &str,
        display: &str,
        min: i64,
        max: i64,
        write: &str,
        read: &str,
    ) -> PropertyDescriptor {
        PropertyDescriptor {
            name: name.to_string(),
            kind: WidgetKind::Range,
            display: display.to_string(),
            values: PropertyValues::Range { min, max },
            write: write.to_string(),
            read: read.to_string(),
        }
    }

    /// Whether the host widget would offer `value`. Out-of-range values can
    /// still reach a script through saved workspaces, so scripts must not rely
    /// on this alone.
    pub fn accepts(&self, value: i64) -> bool {
        match &self.values {
            PropertyValues::Range { min, max } => (*min..=*max).contains(&value),
            _ => true,
        }
    }

    pub fn answers_to(&self, name: &str) -> bool {
        self.name == name || self.write == name || self.read == name
    }

    /// The wire form has no escaping, so `|` may not appear in any field and
    /// `,` may not appear in list items.
    pub fn validate(&self) -> Result<(), StrobeError> {
        for (key, field) in [
            ("name", &self.name),
            ("display", &self.display),
            ("write", &self.write),
            ("read", &self.read),
        ] {
            if field.contains('|') {
                return Err(StrobeError::MalformedDescriptor(format!(
                    "{} {:?} contains '|'",
                    key, field
                )));
            }
        }

        if let PropertyValues::List(items) = &self.values {
            if let Some(item) = items.iter().find(|i| i.contains('|') || i.contains(',')) {
                return Err(StrobeError::MalformedDescriptor(format!(
                    "list item {:?} contains a separator",
                    item
                )));
            }
        }

        Ok(())
    }

    fn parse_values(kind: WidgetKind, raw: &str) -> Result<PropertyValues, StrobeError> {
        if raw.is_empty() {
            return Ok(PropertyValues::None);
        }

        match kind {
            WidgetKind::Range | WidgetKind::Integer => {
                let bounds: Vec<&str> = raw.split(',').collect();
                if bounds.len() != 2 {
                    return Err(StrobeError::MalformedDescriptor(format!(
                        "range needs two bounds, got {:?}",
                        raw
                    )));
                }
                let parse_bound = |bound: &str| {
                    bound.trim().parse::<i64>().map_err(|_| {
                        StrobeError::MalformedDescriptor(format!("bad range bound {:?}", bound))
                    })
                };
                let min = parse_bound(bounds[0])?;
                let max = parse_bound(bounds[1])?;
                if min > max {
                    return Err(StrobeError::MalformedDescriptor(format!(
                        "range {}..{} is empty",
                        min, max
                    )));
                }
                Ok(PropertyValues::Range { min, max })
            }
            WidgetKind::List | WidgetKind::String => Ok(PropertyValues::List(
                raw.split(',').map(|v| v.to_string()).collect(),
            )),
        }
    }
}

impl fmt::Display for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name:{}|type:{}|display:{}",
            self.name,
            self.kind.as_str(),
            self.display
        )?;
        match &self.values {
            PropertyValues::None => {}
            PropertyValues::Range { min, max } => write!(f, "|values:{},{}", min, max)?,
            PropertyValues::List(items) => write!(f, "|values:{}", items.join(","))?,
        }
        write!(f, "|write:{}|read:{}", self.write, self.read)
    }
}

impl FromStr for PropertyDescriptor {
    type Err = StrobeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut name = None;
        let mut kind = None;
        let mut display = String::new();
        let mut values = "";
        let mut write = String::new();
        let mut read = String::new();

        for field in s.split('|') {
            let (key, value) = match field.split_once(':') {
                Some(pair) => pair,
                None => {
                    return Err(StrobeError::MalformedDescriptor(format!(
                        "field without key: {:?}",
                        field
                    )))
                }
            };

            match key {
                "name" => name = Some(value.to_string()),
                "type" => kind = Some(value.parse::<WidgetKind>()?),
                "display" => display = value.to_string(),
                "values" => values = value,
                "write" => write = value.to_string(),
                "read" => read = value.to_string(),
                other => {
                    return Err(StrobeError::MalformedDescriptor(format!(
                        "unknown key {:?}",
                        other
                    )))
                }
            }
        }

        let name = name.ok_or_else(|| StrobeError::MalformedDescriptor("missing name".into()))?;
        let kind = kind.ok_or_else(|| StrobeError::MalformedDescriptor("missing type".into()))?;
        let values = PropertyDescriptor::parse_values(kind, values)?;

        Ok(PropertyDescriptor {
            name,
            kind,
            display,
            values,
            write,
            read,
        })
    }
}
