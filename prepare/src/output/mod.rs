use crate::tables::PropertyTable;

use self::format::const_ident;
use self::format::enum_ident;
use self::format::fn_ident;
use self::format::format_num_vec;
use self::format::variant_ident;

mod format;

/// длина строки в файле с подготовленными данными
const FORMAT_STRING_LENGTH: usize = 120;

/// текстовое представление подготовленной таблицы: две строки происхождения
/// исходного файла, перечисление значений свойства, константа с данными
/// и функция запроса
///
/// чистая сериализация - собираем весь текст в памяти, запись наружу
/// происходит только для полностью закодированной таблицы
pub fn generate(table: &PropertyTable) -> String
{
    let mut output = String::new();

    output.push_str(&table.filename);
    output.push('\n');
    output.push_str(&table.timestamp);
    output.push('\n');

    output.push_str(&values_enum(table));
    output.push('\n');
    output.push_str(&data_const(table));
    output.push('\n');
    output.push_str(&value_fn(table));

    output
}

/// перечисление значений свойства в порядке идентификаторов,
/// плюс зарезервированный вариант NoValue = 255
fn values_enum(table: &PropertyTable) -> String
{
    let enum_name = enum_ident(&table.name);

    let enumerators: String = table
        .encoded
        .values
        .iter()
        .enumerate()
        .map(|(id, value)| format!("    {} = {},\n", variant_ident(value), id))
        .collect();

    let from_raw_arms: String = table
        .encoded
        .values
        .iter()
        .enumerate()
        .map(|(id, value)| format!("            {} => Self::{},\n", id, variant_ident(value)))
        .collect();

    format!(
        "#[derive(Debug, Clone, Copy, PartialEq, Eq)]\n\
        #[repr(u8)]\n\
        pub enum {enum_name}\n\
        {{\n\
        {enumerators}    \
        NoValue = 255,\n\
        }}\n\
        \n\
        impl {enum_name}\n\
        {{\n    \
            pub fn from_raw(value: u8) -> Self\n    \
            {{\n        \
                match value {{\n\
        {from_raw_arms}            \
                    _ => Self::NoValue,\n        \
                }}\n    \
            }}\n\
        }}\n"
    )
}

/// константа с данными таблицы - литерал PropertyData
fn data_const(table: &PropertyTable) -> String
{
    format!(
        "pub const {}: PropertyData<'static> = PropertyData {{\n  \
            lower_bounds: &[{}  ],\n  \
            props_and_size: &[{}  ],\n\
        }};\n",
        const_ident(&table.name),
        format_num_vec(table.encoded.lower_bounds.as_slice(), FORMAT_STRING_LENGTH),
        format_num_vec(table.encoded.props_and_size.as_slice(), FORMAT_STRING_LENGTH),
    )
}

/// функция запроса значения свойства для кодпоинта
fn value_fn(table: &PropertyTable) -> String
{
    let enum_name = enum_ident(&table.name);

    format!(
        "pub fn {}(code: u32) -> {enum_name}\n\
        {{\n    \
            {enum_name}::from_raw({}.get(code))\n\
        }}\n",
        fn_ident(&table.name),
        const_ident(&table.name),
    )
}
