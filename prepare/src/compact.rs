use unicode_properties_source::CodepointRange;

/// слияние соседних диапазонов с одинаковым значением свойства
///
/// чем меньше диапазонов в таблице - тем меньше размер данных и быстрее поиск.
///
/// входные диапазоны предварительно сортируются по нижней границе: порядок
/// строк в файле UCD не является гарантией. после сортировки - один проход
/// слева направо: если очередной диапазон примыкает к последнему записанному
/// (та же property, верхняя граница + 1 == нижняя граница очередного, без
/// зазора) - расширяем последний, иначе записываем новый.
///
/// повторное применение к собственному результату ничего не меняет
pub fn compact_property_ranges(mut input: Vec<CodepointRange>) -> Vec<CodepointRange>
{
    input.sort_by_key(|range| range.lower);

    let mut result: Vec<CodepointRange> = Vec::with_capacity(input.len());

    for range in input {
        if let Some(last) = result.last_mut() {
            if last.prop == range.prop && last.upper + 1 == range.lower {
                last.upper = range.upper;
                continue;
            }
        }

        result.push(range);
    }

    result
}
