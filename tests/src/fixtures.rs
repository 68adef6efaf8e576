//! Fixture records.

use std::collections::HashMap;

use cellmap_mapper::record;

/// Every scalar kind in family `cf1`, plus the row key.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Scalars {
    pub row_key: String,
    pub bytes: Vec<u8>,
    pub string: String,
    pub boolean: bool,
    pub int: isize,
    pub int8: i8,
    pub int16: i16,
    pub int32: i32,
    pub int64: i64,
    pub uint: usize,
    pub uint8: u8,
    pub uint16: u16,
    pub uint32: u32,
    pub uint64: u64,
    pub float32: f32,
    pub float64: f64,
}

record!(Scalars {
    row_key => ",rowkey",
    bytes => "cf1:bytes",
    string => "cf1:string",
    boolean => "cf1:bool",
    int => "cf1:int",
    int8 => "cf1:int8",
    int16 => "cf1:int16",
    int32 => "cf1:int32",
    int64 => "cf1:int64",
    uint => "cf1:uint",
    uint8 => "cf1:uint8",
    uint16 => "cf1:uint16",
    uint32 => "cf1:uint32",
    uint64 => "cf1:uint64",
    float32 => "cf1:float32",
    float64 => "cf1:float64",
});

/// A second family.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Secondary {
    pub string: String,
    pub boolean: bool,
}

record!(Secondary {
    string => "cf2:string",
    boolean => "cf2:bool",
});

/// A family map and untagged fields.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Labels {
    pub labels: HashMap<String, String>,
    pub ignored: String,
    pub untagged: bool,
}

record!(Labels {
    labels => "cf3:$$",
    ignored => "-",
    untagged => "",
});

/// All three families composed through embedding.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Composite {
    pub scalars: Scalars,
    pub secondary: Secondary,
    pub labels: Labels,
}

record!(Composite {
    scalars => embed Scalars,
    secondary => embed Secondary,
    labels => embed Labels,
});

/// Two fields bound to the same coordinate.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Echo {
    pub first: String,
    pub second: String,
}

record!(Echo {
    first => "cf1:value",
    second => "cf1:value",
});

/// The person record used throughout the docs.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Person {
    pub key: String,
    pub name: String,
    pub age: i32,
}

record!(Person {
    key => ",rowkey",
    name => "p:name",
    age => "p:age",
});
