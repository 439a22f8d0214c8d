use collectkit::{
    chunk, chunk_json, drop, drop_json, has_keys, patch, Error, ErrorKind, Group, IndexMap, Key,
    Sequence,
};
use proptest::prelude::*;
use serde::Serialize;
use serde_json::{json, Value};

fn letters() -> Vec<(&'static str, i32)> {
    vec![("a", 1), ("b", 2), ("c", 3), ("d", 4), ("e", 5)]
}

#[test]
fn chunk_list_of_five_by_three() {
    let groups: Vec<Vec<i32>> = chunk(Sequence::from(vec![1, 2, 3, 4, 5]), 3, false)
        .unwrap()
        .map(Group::into_values)
        .collect();
    assert_eq!(groups, vec![vec![1, 2, 3], vec![4, 5]]);
}

#[test]
fn chunk_mapping_preserving_keys() {
    let groups: Vec<Vec<(Key, i32)>> = chunk(Sequence::associative(letters()), 2, true)
        .unwrap()
        .map(Group::into_entries)
        .collect();
    assert_eq!(
        groups,
        vec![
            vec![(Key::from("a"), 1), (Key::from("b"), 2)],
            vec![(Key::from("c"), 3), (Key::from("d"), 4)],
            vec![(Key::from("e"), 5)],
        ]
    );

    let doc = json!({"a": 1, "b": 2, "c": 3, "d": 4, "e": 5});
    assert_eq!(
        chunk_json(&doc, 2, true).unwrap(),
        json!([{"a": 1, "b": 2}, {"c": 3, "d": 4}, {"e": 5}])
    );
    assert_eq!(
        chunk_json(&doc, 2, false).unwrap(),
        json!([[1, 2], [3, 4], [5]])
    );
}

#[test]
fn chunk_generator_and_keyed_iterator() {
    let generator = (1..=5).map(|n| n * 10);
    let groups: Vec<Vec<i32>> = chunk(Sequence::lazy(generator), 2, false)
        .unwrap()
        .map(Group::into_values)
        .collect();
    assert_eq!(groups, vec![vec![10, 20], vec![30, 40], vec![50]]);

    let external = letters().into_iter().map(|(k, v)| (Key::from(k), v));
    let mut groups = chunk(Sequence::lazy_pairs(external), 3, true).unwrap();
    let first = groups.next().unwrap();
    assert_eq!(first.keys().cloned().collect::<Vec<_>>(), vec![
        Key::from("a"),
        Key::from("b"),
        Key::from("c"),
    ]);
    assert_eq!(groups.next().unwrap().into_values(), vec![4, 5]);
    assert!(groups.next().is_none());
}

#[test]
fn chunk_size_zero_is_invalid_argument() {
    let err: Error = chunk(Sequence::from(vec![1, 2]), 0, false).unwrap_err().into();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn drop_past_end_and_zero() {
    assert!(drop(Sequence::from(vec![1, 2, 3]), 5).into_values().is_empty());
    assert_eq!(drop(Sequence::from(vec![1, 2, 3]), 0).into_values(), vec![1, 2, 3]);
    assert_eq!(drop(Sequence::from(vec![1, 2, 3]), 1).into_values(), vec![2, 3]);
}

#[test]
fn drop_keeps_keys_of_mappings() {
    let map: IndexMap<Key, i32> = letters().into_iter().map(|(k, v)| (Key::from(k), v)).collect();
    let rest = drop(Sequence::from(map), 3).into_pairs();
    assert_eq!(rest, vec![(Key::from("d"), 4), (Key::from("e"), 5)]);

    assert_eq!(
        drop_json(&json!({"a": 1, "b": 2, "c": 3}), 1).unwrap(),
        json!({"b": 2, "c": 3})
    );
    assert_eq!(drop_json(&json!([1, 2, 3]), 1).unwrap(), json!([2, 3]));
}

#[test]
fn scalar_source_is_type_error() {
    let err: Error = drop_json(&json!(42), 1).unwrap_err().into();
    assert_eq!(err.kind(), ErrorKind::TypeError);
    let err: Error = chunk_json(&json!("abc"), 2, false).unwrap_err().into();
    assert_eq!(err.kind(), ErrorKind::TypeError);
}

#[test]
fn has_keys_cases() {
    let mut a = json!({"foo": "bar"});
    assert!(!has_keys(&a, ["foo", "foz"], true));
    assert!(has_keys(&a, ["foo", "foz"], false));

    a["foz"] = json!("baz");
    assert!(has_keys(&a, ["foo", "foz"], true));

    let b = json!({"foo": {"bar": "foie"}, "estomac": true});
    assert!(has_keys(&b, ["foo.bar", "estomac"], true));
    assert!(!has_keys(&b, ["foo.baz", "estomac.x"], false));
}

#[derive(Serialize)]
struct Order {
    id: u32,
    customer: Customer,
    lines: Vec<String>,
}

#[derive(Serialize)]
struct Customer {
    name: String,
    email: Option<String>,
}

#[test]
fn has_keys_on_serialized_struct() {
    let order = Order {
        id: 7,
        customer: Customer {
            name: "Ada".to_string(),
            email: None,
        },
        lines: vec!["widget".to_string()],
    };
    let doc = serde_json::to_value(&order).unwrap();
    assert!(has_keys(&doc, ["id", "customer.name", "customer.email", "lines.0"], true));
    assert!(!has_keys(&doc, ["lines.1", "customer.phone"], false));
}

#[test]
fn patch_contact_card() {
    let subject = json!({
        "a": [1, 1, 1],
        "contacts": {"country": "US", "tel": [123]},
        "extra": 99
    });
    let patched = patch(
        &subject,
        [
            ("/a/0", json!(2)),
            ("/a/1", json!(3)),
            ("/contacts/country", json!("CA")),
            ("/contacts/tel/0", json!(3456)),
        ],
    )
    .unwrap();
    assert_eq!(
        patched,
        json!({"a": [2, 3, 1], "contacts": {"country": "CA", "tel": [3456]}, "extra": 99})
    );
    assert_eq!(subject["a"], json!([1, 1, 1]));
}

#[test]
fn patch_invalid_path_is_invalid_path() {
    let err: Error = patch(&json!({}), [("nope", json!(1))]).unwrap_err().into();
    assert_eq!(err.kind(), ErrorKind::InvalidPath);
}

#[test]
fn patched_paths_are_then_present() {
    fn run() -> Result<bool, Error> {
        let doc = patch(
            &json!({}),
            [("/user/name", json!("n")), ("/user/tags/0", json!("t"))],
        )?;
        Ok(has_keys(&doc, ["user.name", "user.tags.0"], true))
    }
    assert_eq!(run(), Ok(true));
}

proptest! {
    #[test]
    fn has_keys_all_implies_any(
        present in prop::collection::btree_set("[a-d]", 0..4),
        asked in prop::collection::vec("[a-f]", 0..5),
    ) {
        let doc = Value::Object(present.iter().map(|k| (k.clone(), json!(true))).collect());
        if has_keys(&doc, &asked, true) {
            prop_assert!(has_keys(&doc, &asked, false));
        }
    }

    #[test]
    fn chunked_json_array_flattens_back(values in prop::collection::vec(any::<i64>(), 0..40), size in 1usize..8) {
        let doc = Value::from(values.clone());
        let groups = chunk_json(&doc, size, false).unwrap();
        let flat: Vec<Value> = groups
            .as_array()
            .unwrap()
            .iter()
            .flat_map(|group| group.as_array().unwrap().clone())
            .collect();
        prop_assert_eq!(Value::Array(flat), doc);
    }
}
