/// максимальный кодпоинт Unicode
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// диапазон кодпоинтов с одним значением свойства
/// источник - строка файла свойств UCD, например GraphemeBreakProperty.txt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodepointRange
{
    /// первый кодпоинт диапазона
    pub lower: u32,
    /// последний кодпоинт диапазона (включительно)
    pub upper: u32,
    /// название значения свойства
    pub prop: String,
}

impl CodepointRange
{
    pub fn new(lower: u32, upper: u32, prop: &str) -> Self
    {
        assert!(lower <= upper);

        Self {
            lower,
            upper,
            prop: prop.to_owned(),
        }
    }

    /// количество кодпоинтов в диапазоне
    #[inline]
    pub fn size(&self) -> u32
    {
        self.upper - self.lower + 1
    }

    /// входит ли кодпоинт в диапазон?
    #[inline]
    pub fn contains(&self, code: u32) -> bool
    {
        (self.lower ..= self.upper).contains(&code)
    }
}
