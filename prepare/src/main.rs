use std::fs;
use std::process::exit;

use unicode_properties_prepare::output;
use unicode_properties_prepare::tables::build_table;
use unicode_properties_source::PropertyFile;

/// файлы UCD, лежащие рядом с генератором:
///
/// GraphemeBreakProperty.txt:
/// https://www.unicode.org/Public/UCD/latest/ucd/auxiliary/GraphemeBreakProperty.txt
///
/// emoji-data.txt:
/// https://www.unicode.org/Public/UCD/latest/ucd/emoji/emoji-data.txt
const GRAPHEME_BREAK_PATH: &str = "./data/GraphemeBreakProperty.txt";
const EMOJI_DATA_PATH: &str = "./data/emoji-data.txt";

/// строим таблицы Grapheme_Break и Extended_Pictographic, результат - в stdout
fn main()
{
    let grapheme_break = read_property_file(GRAPHEME_BREAK_PATH);
    let emoji_data = read_property_file(EMOJI_DATA_PATH);

    let grapheme_break = generate("Grapheme_Break", &grapheme_break, None);

    // в emoji-data.txt несколько свойств, для сегментации нужно одно
    let extended_pictographic = generate(
        "Extended_Pictographic",
        &emoji_data,
        Some("Extended_Pictographic"),
    );

    println!("{}\n{}", grapheme_break, extended_pictographic);
}

/// прочитаем и разберём файл UCD; недоступный файл - фатальная ошибка,
/// ничего не генерируем
fn read_property_file(path: &str) -> PropertyFile
{
    match fs::read_to_string(path) {
        Ok(data) => PropertyFile::parse(&data),
        Err(error) => {
            eprintln!("{}: {}", path, error);
            exit(1);
        }
    }
}

/// построим и сериализуем таблицу; ошибка кодирования - фатальная,
/// частично собранные данные не выводятся
fn generate(name: &str, file: &PropertyFile, filter: Option<&str>) -> String
{
    match build_table(file, name, filter) {
        Ok(table) => output::generate(&table),
        Err(error) => {
            eprintln!("таблица {}: {}", name, error);
            exit(1);
        }
    }
}
