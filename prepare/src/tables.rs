use unicode_properties_source::CodepointRange;
use unicode_properties_source::PropertyFile;

use crate::compact::compact_property_ranges;
use crate::encode::encode_ranges;
use crate::encode::EncodeError;
use crate::encode::EncodedTable;

/// подготовленная таблица свойства: закодированные данные и строки
/// происхождения исходного файла UCD
#[derive(Debug)]
pub struct PropertyTable
{
    /// название свойства, например "Grapheme_Break"
    pub name: String,
    /// первая строка исходного файла - название
    pub filename: String,
    /// вторая строка исходного файла - дата генерации
    pub timestamp: String,
    /// закодированные данные
    pub encoded: EncodedTable,
}

/// построение таблицы свойства из разобранного файла UCD:
/// фильтрация (если нужна) -> компактизация -> кодирование
///
/// filter - если задан, в таблицу попадают только диапазоны с этим значением
/// свойства. случай emoji-data.txt: в файле несколько свойств с пересекающимися
/// диапазонами, нам нужно только Extended_Pictographic. фильтруем до
/// компактизации - оставшиеся диапазоны не пересекаются, и слияние
/// отсортированных соседей даёт максимальные диапазоны
pub fn build_table(
    file: &PropertyFile,
    name: &str,
    filter: Option<&str>,
) -> Result<PropertyTable, EncodeError>
{
    let ranges: Vec<CodepointRange> = file
        .ranges
        .iter()
        .filter(|range| filter.map_or(true, |prop| range.prop == prop))
        .cloned()
        .collect();

    let compacted = compact_property_ranges(ranges);
    let encoded = encode_ranges(&compacted)?;

    Ok(PropertyTable {
        name: name.to_owned(),
        filename: file.filename.clone(),
        timestamp: file.timestamp.clone(),
        encoded,
    })
}
