//! Record -> mutation building.

use std::collections::HashMap;

use cellmap_mapper::{Mutation, MutationSink};
use cellmap_tests::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn ts() -> Timestamp {
    Timestamp::from_micros(1_700_000_000_000_000)
}

/// Replay a mutation as the row a store would return for it.
fn as_row(rm: &RowMutation) -> Row {
    let mut row = Row::new();
    for cell in rm.mutation.entries() {
        let column = format!("{}:{}", cell.family, cell.column);
        row.push(
            cell.family.clone(),
            ReadItem::new(rm.key.clone(), column, cell.value.clone()),
        );
    }
    row
}

fn columns(rm: &RowMutation) -> Vec<String> {
    rm.mutation
        .entries()
        .iter()
        .map(|e| format!("{}:{}", e.family, e.column))
        .collect()
}

mod building {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_person_mutation() {
        // GIVEN a populated person
        let mut person = Person {
            key: "r1".to_string(),
            name: "Ada".to_string(),
            age: 38,
        };

        // WHEN the mutation is built
        let rm = build_mutation(&mut person, ts()).unwrap();

        // THEN two entries, the key and the byte size
        assert_eq!(rm.key, "r1");
        assert_eq!(columns(&rm), vec!["p:name", "p:age"]);
        assert_eq!(rm.mutation.get("p", "name").unwrap().value, b"Ada".to_vec());
        assert_eq!(rm.mutation.get("p", "age").unwrap().value, vec![0, 0, 0, 38]);
        assert_eq!(rm.size, 7);
        assert!(rm.mutation.entries().iter().all(|e| e.timestamp == ts()));
    }

    #[test]
    fn test_zero_fields_are_skipped() {
        // GIVEN only a string, a float and the row key set
        let mut scalars = Scalars {
            row_key: "rk".to_string(),
            string: "hello".to_string(),
            boolean: false,
            float32: 3.14,
            ..Scalars::default()
        };

        // WHEN the mutation is built
        let rm = build_mutation(&mut scalars, ts()).unwrap();

        // THEN the false bool and other zero values produce nothing
        assert_eq!(rm.key, "rk");
        assert_eq!(columns(&rm), vec!["cf1:string", "cf1:float32"]);
        assert_eq!(rm.size, 5 + 4);
    }

    #[test]
    fn test_all_zero_record_is_empty() {
        let mut composite = Composite::default();
        let rm = build_mutation(&mut composite, ts()).unwrap();
        assert!(rm.mutation.is_empty());
        assert_eq!(rm.size, 0);
        assert_eq!(rm.key, "");
        assert!(!rm.has_key());
    }

    #[test]
    fn test_negative_zero_float_is_written() {
        let mut scalars = Scalars {
            float64: -0.0,
            ..Scalars::default()
        };
        let rm = build_mutation(&mut scalars, ts()).unwrap();
        let cell = rm.mutation.get("cf1", "float64").unwrap();
        assert_eq!(cell.value, (-0.0f64).to_be_bytes().to_vec());
    }

    #[test]
    fn test_string_map_entries() {
        // GIVEN a labels map with two keys
        let mut labels = Labels::default();
        labels.labels.insert("foo".to_string(), "abc".to_string());
        labels.labels.insert("bar".to_string(), "123".to_string());
        labels.ignored = "never written".to_string();
        labels.untagged = true;

        // WHEN the mutation is built
        let rm = build_mutation(&mut labels, ts()).unwrap();

        // THEN one entry per key, qualifier = key, in key order
        assert_eq!(columns(&rm), vec!["cf3:bar", "cf3:foo"]);
        assert_eq!(rm.mutation.get("cf3", "foo").unwrap().value, b"abc".to_vec());
        assert_eq!(rm.size, 6);
    }

    #[test]
    fn test_non_utf8_row_key_is_rejected() {
        #[derive(Default)]
        struct BinaryKey {
            key: Vec<u8>,
            value: String,
        }

        record!(BinaryKey {
            key => ",rowkey",
            value => "cf:value",
        });

        let mut record = BinaryKey {
            key: vec![0xff, 0x00],
            value: "v".to_string(),
        };
        let result = build_mutation(&mut record, ts());
        assert!(matches!(result, Err(MapError::InvalidRowKey { .. })));
    }
}

mod sinks {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Sink that only tallies what it receives.
    #[derive(Default)]
    struct Tally {
        per_family: HashMap<String, usize>,
        bytes: usize,
    }

    impl MutationSink for Tally {
        fn set(&mut self, family: &str, _column: &str, _timestamp: Timestamp, value: Vec<u8>) {
            *self.per_family.entry(family.to_string()).or_default() += 1;
            self.bytes += value.len();
        }
    }

    #[test]
    fn test_write_into_custom_sink() {
        let mut composite = Composite::default();
        composite.scalars.row_key = "k".to_string();
        composite.scalars.int64 = 9;
        composite.secondary.boolean = true;
        composite
            .labels
            .labels
            .insert("a".to_string(), "xyz".to_string());

        let mut tally = Tally::default();
        let summary = Mapper::default()
            .write_mutation(&mut composite, ts(), &mut tally)
            .unwrap();

        assert_eq!(summary.key, "k");
        assert_eq!(summary.entries, 3);
        assert_eq!(summary.size, 8 + 1 + 3);
        assert_eq!(tally.bytes, summary.size);
        assert_eq!(tally.per_family["cf1"], 1);
        assert_eq!(tally.per_family["cf2"], 1);
        assert_eq!(tally.per_family["cf3"], 1);
    }

    #[test]
    fn test_dyn_sink() {
        let mut person = Person {
            name: "Bo".to_string(),
            ..Person::default()
        };
        let mut mutation = Mutation::new();
        let sink: &mut dyn MutationSink = &mut mutation;
        Mapper::default()
            .write_mutation(&mut person, ts(), sink)
            .unwrap();
        assert_eq!(mutation.len(), 1);
    }
}

mod round_trip {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_composite_survives_round_trip() {
        // GIVEN a composite with every family populated
        let mut original = Composite::default();
        original.scalars = Scalars {
            row_key: "rt".to_string(),
            bytes: vec![1, 2, 3],
            string: "text".to_string(),
            boolean: true,
            int: -5,
            int8: -8,
            int16: 16,
            int32: -32,
            int64: 64,
            uint: 5,
            uint8: 8,
            uint16: 16,
            uint32: 32,
            uint64: u64::MAX,
            float32: 1.5,
            float64: -2.25,
        };
        original.secondary.string = "two".to_string();
        original
            .labels
            .labels
            .insert("k".to_string(), "v".to_string());

        // WHEN written and read back
        let rm = build_mutation(&mut original, ts()).unwrap();
        let mut restored = Composite::default();
        populate(&as_row(&rm), &mut restored).unwrap();

        // THEN the mapped fields match
        assert_eq!(restored, original);
    }

    #[test]
    fn test_random_scalars_round_trip() {
        let mut rng = StdRng::seed_from_u64(42);

        for i in 0..64 {
            let mut original = Scalars {
                row_key: format!("row-{}", i),
                bytes: (0..rng.gen_range(1..16)).map(|_| rng.gen()).collect(),
                string: format!("s{}", rng.gen::<u32>()),
                boolean: true,
                int: rng.gen_range(1..isize::MAX),
                int8: rng.gen_range(1..i8::MAX),
                int16: rng.gen_range(i16::MIN..-1),
                int32: rng.gen_range(1..i32::MAX),
                int64: rng.gen_range(i64::MIN..-1),
                uint: rng.gen_range(1..usize::MAX),
                uint8: rng.gen_range(1..u8::MAX),
                uint16: rng.gen_range(1..u16::MAX),
                uint32: rng.gen_range(1..u32::MAX),
                uint64: rng.gen_range(1..u64::MAX),
                float32: rng.gen_range(1.0f32..1e6),
                float64: rng.gen_range(-1e12f64..-1.0),
            };

            let rm = build_mutation(&mut original, ts()).unwrap();
            assert_eq!(rm.mutation.len(), 15);

            let mut restored = Scalars::default();
            populate(&as_row(&rm), &mut restored).unwrap();
            assert_eq!(restored, original);
        }
    }
}
