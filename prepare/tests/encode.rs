use unicode_properties::NO_VALUE;
use unicode_properties_prepare::compact::compact_property_ranges;
use unicode_properties_prepare::encode::encode_ranges;
use unicode_properties_prepare::encode::property_values;
use unicode_properties_prepare::encode::EncodeError;
use unicode_properties_prepare::encode::MAX_RANGE_SIZE;
use unicode_properties_source::CodepointRange;

fn range(lower: u32, upper: u32, prop: &str) -> CodepointRange
{
    CodepointRange::new(lower, upper, prop)
}

/// идентификаторы значений - лексикографический порядок названий
#[test]
fn value_ids_are_lexicographic()
{
    let ranges = vec![
        range(0x100, 0x1FF, "Zeta"),
        range(0x300, 0x3FF, "Alpha"),
        range(0x200, 0x2FF, "Beta"),
        range(0x400, 0x4FF, "Alpha"),
    ];

    assert_eq!(property_values(&ranges), vec!["Alpha", "Beta", "Zeta"]);
}

/// пример из двух диапазонов без зазора, но с разными значениями свойства
#[test]
fn encode_example()
{
    let lines = ["0041..005A ; Alpha", "005B..007A ; Beta"];

    let ranges: Vec<CodepointRange> = lines
        .iter()
        .filter_map(|line| unicode_properties_source::parse_property_line(line))
        .collect();

    let compacted = compact_property_ranges(ranges);
    assert_eq!(compacted.len(), 2);

    let table = encode_ranges(&compacted).unwrap();

    assert_eq!(table.values, vec!["Alpha", "Beta"]);
    assert_eq!(table.lower_bounds, vec![0x41, 0x5B]);

    // размер 26 (0x1A), значение 0 -> 0x001A; размер 32 (0x20), значение 1 -> 0x1020
    assert_eq!(table.props_and_size, vec![0x001A, 0x1020]);

    let data = table.as_property_data();

    assert_eq!(data.get(0x40), NO_VALUE);
    assert_eq!(data.get(0x41), 0);
    assert_eq!(data.get(0x5A), 0);
    assert_eq!(data.get(0x5B), 1);
    assert_eq!(data.get(0x7A), 1);
    assert_eq!(data.get(0x7B), NO_VALUE);
}

/// размер диапазона - максимум 4095 кодпоинтов
#[test]
fn range_size_capacity()
{
    let widest = vec![range(0x1000, 0x1000 + MAX_RANGE_SIZE - 1, "A")];
    assert!(encode_ranges(&widest).is_ok());

    let too_wide = vec![range(0x1000, 0x1000 + MAX_RANGE_SIZE, "A")];

    assert_eq!(
        encode_ranges(&too_wide),
        Err(EncodeError::RangeTooWide {
            lower: 0x1000,
            upper: 0x1000 + MAX_RANGE_SIZE,
        })
    );
}

/// значений свойства - максимум 16
#[test]
fn property_values_capacity()
{
    let ranges: Vec<CodepointRange> = (0 .. 16u32)
        .map(|i| range(i * 0x20, i * 0x20 + 0x10, format!("Value{:02}", i).as_str()))
        .collect();

    assert!(encode_ranges(&ranges).is_ok());

    let mut overflow = ranges;
    overflow.push(range(0x1000, 0x1010, "Value16"));

    assert_eq!(
        encode_ranges(&overflow),
        Err(EncodeError::TooManyValues { count: 17 })
    );
}

/// кодирование не полагается на порядок на входе
#[test]
fn encode_sorts_defensively()
{
    let ranges = vec![range(0x200, 0x2FF, "B"), range(0x100, 0x1FF, "A")];

    let table = encode_ranges(&ranges).unwrap();

    assert_eq!(table.lower_bounds, vec![0x100, 0x200]);
    assert_eq!(table.props_and_size, vec![0x0100, 0x1100]);
}

#[test]
fn encode_empty()
{
    let table = encode_ranges(&[]).unwrap();

    assert!(table.values.is_empty());
    assert!(table.lower_bounds.is_empty());
    assert_eq!(table.as_property_data().get(0x41), NO_VALUE);
}
