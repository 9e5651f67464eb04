//! Integration tests for the structural identity derives on user-defined
//! types.

use std::collections::HashMap;

use funrs::structural::{StructuralDisplay, StructuralHash};
use funrs::union::UnionType;
use rstest::rstest;

#[derive(Debug, Clone, PartialEq, Eq, StructuralDisplay, StructuralHash)]
struct Name {
    first: String,
    last: String,
}

impl Name {
    fn new(first: &str, last: &str) -> Self {
        Self {
            first: first.to_string(),
            last: last.to_string(),
        }
    }
}

// Same field list as Name, but a different type: hashes must differ.
#[derive(Debug, Clone, PartialEq, Eq, StructuralDisplay, StructuralHash)]
struct Alias {
    first: String,
    last: String,
}

#[derive(Debug, Clone, PartialEq, Eq, StructuralDisplay, StructuralHash)]
struct Marker;

#[derive(Debug, Clone, PartialEq, Eq, UnionType, StructuralDisplay, StructuralHash)]
enum Shape {
    Circle(u32),
    Rectangle { width: u32, height: u32 },
    Point,
}

#[rstest]
fn test_record_renders_with_named_fields() {
    assert_eq!(
        Name::new("Joe", "Blow").to_string(),
        "Name { first = Joe, last = Blow }"
    );
}

#[rstest]
fn test_field_less_record_renders_as_bare_type_name() {
    assert_eq!(Marker.to_string(), "Marker");
}

#[rstest]
#[case(Shape::Circle(3), "Circle(3)")]
#[case(Shape::Rectangle { width: 2, height: 4 }, "Rectangle(2, 4)")]
#[case(Shape::Point, "Point")]
fn test_union_variants_render_as_tagged_values(#[case] shape: Shape, #[case] expected: &str) {
    assert_eq!(shape.to_string(), expected);
}

#[rstest]
#[case(Shape::Circle(3), "Circle")]
#[case(Shape::Rectangle { width: 2, height: 4 }, "Rectangle")]
#[case(Shape::Point, "Point")]
fn test_union_tag_is_the_variant_name(#[case] shape: Shape, #[case] expected: &str) {
    assert_eq!(shape.tag(), expected);
}

#[rstest]
fn test_equal_records_hash_identically() {
    assert_eq!(
        Name::new("Joe", "Blow").structural_hash(),
        Name::new("Joe", "Blow").structural_hash()
    );
    assert_ne!(
        Name::new("Joe", "Blow").structural_hash(),
        Name::new("Joe", "Doe").structural_hash()
    );
}

#[rstest]
fn test_distinct_types_with_equal_fields_hash_differently() {
    assert_ne!(
        Name::new("Joe", "Blow").structural_hash(),
        Alias {
            first: "Joe".to_string(),
            last: "Blow".to_string()
        }
        .structural_hash()
    );
}

#[rstest]
fn test_variants_of_one_union_hash_differently() {
    // A Circle and a Rectangle that happen to share a field value.
    assert_ne!(
        Shape::Circle(2).structural_hash(),
        Shape::Rectangle {
            width: 2,
            height: 2
        }
        .structural_hash()
    );
}

#[rstest]
fn test_field_order_matters_for_hashing() {
    assert_ne!(
        Name::new("Joe", "Blow").structural_hash(),
        Name::new("Blow", "Joe").structural_hash()
    );
}

#[rstest]
fn test_derived_types_work_as_dictionary_keys() {
    let mut population = HashMap::new();
    population.insert(Name::new("Joe", "Blow"), 1);
    assert_eq!(population.get(&Name::new("Joe", "Blow")), Some(&1));
    assert_eq!(population.get(&Name::new("Joe", "Doe")), None);

    let mut shapes = HashMap::new();
    shapes.insert(Shape::Circle(1), "small");
    assert_eq!(shapes.get(&Shape::Circle(1)), Some(&"small"));
}
