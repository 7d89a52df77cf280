use crate::{
    check::CheckIssue,
    instance::ItemInstance,
    test_fixtures::{field, insert_class, standard_pool},
    value::{ItemReference, Value},
};
use bearkit_schema::{pool::ClassPool, types::FieldType};
use std::collections::BTreeSet;

fn ids(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(ToString::to_string).collect()
}

#[test]
fn missing_required_field_is_reported_once() {
    let (pool, bonus) = standard_pool();
    let item = ItemInstance::new(&pool, bonus);

    let report = item.check(&pool, &ids(&[]));
    let missing: Vec<_> = report
        .iter()
        .filter(|issue| matches!(issue, CheckIssue::RequiredFieldMissing { field } if field == "bonus.points"))
        .collect();

    assert_eq!(missing.len(), 1);
}

#[test]
fn assigned_required_field_passes() {
    let (pool, bonus) = standard_pool();
    let mut item = ItemInstance::new(&pool, bonus);
    item.set_value(&pool, "bonus.points", 5u32);
    item.set_fixed(false);

    let report = item.check(&pool, &ids(&[]));
    assert!(report.is_empty(), "unexpected issues: {:?}", report.issues());
}

#[test]
fn fixed_item_with_mass_is_reported() {
    let (pool, bonus) = standard_pool();
    let mut item = ItemInstance::new(&pool, bonus);
    item.set_value(&pool, "bonus.points", 5u32);
    item.set_fixed(true);
    item.set_value(&pool, "base_item.mass", 12.5f64);

    let report = item.check(&pool, &ids(&[]));
    assert_eq!(report.len(), 1);
    assert_eq!(report.issues()[0], CheckIssue::FixedItemWithMass);

    // unfixed, the same mass is fine
    item.set_fixed(false);
    assert!(item.check(&pool, &ids(&[])).is_empty());

    // fixed without mass is fine too
    item.set_fixed(true);
    let mass = pool
        .class(bonus)
        .field(&pool, "base_item.mass")
        .expect("field resolves")
        .clone();
    item.delete_value(&pool, &mass);
    assert!(item.check(&pool, &ids(&[])).is_empty());
}

#[test]
fn dangling_reference_names_the_missing_id() {
    let (pool, bonus) = standard_pool();
    let mut item = ItemInstance::new(&pool, bonus);
    item.set_value(&pool, "bonus.points", 5u32);
    item.set_fixed(false);
    item.set_value(&pool, "bonus.next", ItemReference::from("foo"));

    let report = item.check(&pool, &ids(&["bar", "baz"]));
    assert_eq!(report.len(), 1);
    assert_eq!(
        report.issues()[0],
        CheckIssue::DanglingReference {
            id: "foo".to_string()
        }
    );

    // the reference resolving makes the report clean
    let report = item.check(&pool, &ids(&["foo", "bar"]));
    assert!(report.is_empty());
}

#[test]
fn list_reference_elements_are_checked_independently() {
    let mut pool = ClassPool::new();
    let class = insert_class(
        &mut pool,
        "linked",
        &[],
        vec![field("linked.many", FieldType::ItemReference).list()],
    );

    let mut item = ItemInstance::new(&pool, class);
    item.set_value(
        &pool,
        "linked.many",
        Value::list(
            FieldType::ItemReference,
            vec![
                Value::ItemReference(ItemReference::from("known")),
                Value::ItemReference(ItemReference::from("lost")),
                Value::ItemReference(ItemReference::from("gone")),
            ],
        )
        .expect("homogeneous list"),
    );

    let report = item.check(&pool, &ids(&["known"]));
    assert_eq!(report.len(), 2);
    assert!(report.iter().all(|issue| matches!(
        issue,
        CheckIssue::DanglingReference { id } if id == "lost" || id == "gone"
    )));
}
