use crate::range::CodepointRange;
use crate::range::MAX_CODEPOINT;

/// разобранный файл свойств UCD
///
/// первые две строки файла - комментарии с названием файла и датой генерации,
/// сохраняем их, чтобы воспроизвести в сгенерированных данных
#[derive(Debug, Clone)]
pub struct PropertyFile
{
    /// первая строка файла - название исходного файла
    pub filename: String,
    /// вторая строка файла - дата генерации
    pub timestamp: String,
    /// диапазоны кодпоинтов в порядке следования в файле
    pub ranges: Vec<CodepointRange>,
}

impl PropertyFile
{
    /// разбор текста файла свойств UCD
    pub fn parse(data: &str) -> Self
    {
        let mut lines = data.lines();

        let filename = comment_line(lines.next().unwrap_or_default());
        let timestamp = comment_line(lines.next().unwrap_or_default());

        let ranges = lines.filter_map(parse_property_line).collect();

        Self {
            filename,
            timestamp,
            ranges,
        }
    }
}

/// строка заголовка: маркер комментария UCD заменяется на комментарий Rust
fn comment_line(line: &str) -> String
{
    line.replace('#', "//").trim_end().to_owned()
}

/// разбор строки данных файла свойств UCD
///
/// формат: `LOWER[..UPPER] ; PROPERTY`, где границы - 4-5 шестнадцатеричных цифр
/// в верхнем регистре, значение свойства - идентификатор (буквы, цифры,
/// подчёркивание); всё после значения (как правило, комментарий) игнорируется.
/// если верхняя граница не указана - диапазон из одного кодпоинта
///
/// строки, не подходящие под формат (заголовки, комментарии, пустые строки),
/// данными не являются - получим None
pub fn parse_property_line(line: &str) -> Option<CodepointRange>
{
    let (lower, rest) = hex_codepoint(line)?;

    let (upper, rest) = match rest.strip_prefix("..") {
        Some(rest) => hex_codepoint(rest)?,
        None => (lower, rest),
    };

    let rest = rest.trim_start().strip_prefix(';')?;

    let prop: String = rest
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    if prop.is_empty() || lower > upper || upper > MAX_CODEPOINT {
        return None;
    }

    Some(CodepointRange { lower, upper, prop })
}

/// значение кодпоинта - 4-5 шестнадцатеричных цифр в верхнем регистре.
/// возвращает значение и остаток строки
fn hex_codepoint(source: &str) -> Option<(u32, &str)>
{
    let digits = source
        .bytes()
        .take_while(|b| matches!(b, b'0' ..= b'9' | b'A' ..= b'F'))
        .count();

    if !(4 ..= 5).contains(&digits) {
        return None;
    }

    let value = u32::from_str_radix(&source[.. digits], 16).ok()?;

    Some((value, &source[digits ..]))
}
