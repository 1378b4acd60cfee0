use unicode_properties::PropertyData;
use unicode_properties::PROPERTY_VALUE_SHIFT;
use unicode_properties::RANGE_SIZE_MASK;
use unicode_properties_source::CodepointRange;

/// максимальное количество различных значений свойства в одной таблице:
/// идентификатор значения хранится в 4 битах упакованного элемента
pub const MAX_PROPERTY_VALUES: usize = 16;

/// максимальный размер диапазона - 12 бит упакованного элемента.
/// более широкий диапазон в формат не вписывается
pub const MAX_RANGE_SIZE: u32 = RANGE_SIZE_MASK as u32;

/// закодированная таблица свойства (см. PropertyData - формат хранения)
#[derive(Debug, PartialEq, Eq)]
pub struct EncodedTable
{
    /// значения свойства; индекс значения - его идентификатор в таблице
    pub values: Vec<String>,
    /// нижние границы диапазонов, по возрастанию
    pub lower_bounds: Vec<u32>,
    /// размер диапазона (биты 0-11) и идентификатор значения (биты 12-15)
    pub props_and_size: Vec<u16>,
}

impl EncodedTable
{
    /// представление для поиска, без копирования данных
    pub fn as_property_data(&self) -> PropertyData
    {
        PropertyData {
            lower_bounds: &self.lower_bounds,
            props_and_size: &self.props_and_size,
        }
    }
}

/// ошибка кодирования - данные не вписываются в формат таблицы
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError
{
    /// размер диапазона больше 4095 кодпоинтов
    RangeTooWide { lower: u32, upper: u32 },
    /// в таблице больше 16 различных значений свойства
    TooManyValues { count: usize },
}

impl core::fmt::Display for EncodeError
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        match self {
            EncodeError::RangeTooWide { lower, upper } => {
                write!(
                    f,
                    "диапазон U+{:04X}..U+{:04X} шире {} кодпоинтов и не вписывается в 12 бит размера",
                    lower, upper, MAX_RANGE_SIZE
                )
            }
            EncodeError::TooManyValues { count } => {
                write!(
                    f,
                    "{} значений свойства, идентификатор не вписывается в 4 бита (максимум - {})",
                    count, MAX_PROPERTY_VALUES
                )
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// различные значения свойства, отсортированные лексикографически по возрастанию
///
/// порядок - часть формата: индекс значения в списке становится его
/// идентификатором и в упакованных данных, и в генерируемом перечислении
pub fn property_values(ranges: &[CodepointRange]) -> Vec<String>
{
    let mut values: Vec<String> = ranges.iter().map(|range| range.prop.clone()).collect();

    values.sort();
    values.dedup();

    values
}

/// кодирование диапазонов свойства в таблицу для бинарного поиска
///
/// диапазоны пересортировываются по нижней границе - после компактизации
/// порядок уже должен быть правильным, но кодирование на это не полагается
pub fn encode_ranges(ranges: &[CodepointRange]) -> Result<EncodedTable, EncodeError>
{
    let values = property_values(ranges);

    if values.len() > MAX_PROPERTY_VALUES {
        return Err(EncodeError::TooManyValues {
            count: values.len(),
        });
    }

    let mut sorted: Vec<&CodepointRange> = ranges.iter().collect();
    sorted.sort_by_key(|range| range.lower);

    let mut lower_bounds: Vec<u32> = Vec::with_capacity(sorted.len());
    let mut props_and_size: Vec<u16> = Vec::with_capacity(sorted.len());

    for range in sorted {
        let size = range.size();

        if size > MAX_RANGE_SIZE {
            return Err(EncodeError::RangeTooWide {
                lower: range.lower,
                upper: range.upper,
            });
        }

        // значение гарантированно присутствует - список построен из этих же диапазонов
        let value_id = match values.binary_search(&range.prop) {
            Ok(index) => index as u16,
            Err(_) => unreachable!(),
        };

        lower_bounds.push(range.lower);
        props_and_size.push(size as u16 | (value_id << PROPERTY_VALUE_SHIFT));
    }

    Ok(EncodedTable {
        values,
        lower_bounds,
        props_and_size,
    })
}
