/// зарезервированный идентификатор "кодпоинт не имеет значения свойства"
pub const NO_VALUE: u8 = 255;

/// маска размера диапазона в упакованном значении (биты 0 - 11)
pub const RANGE_SIZE_MASK: u16 = 0x0FFF;
/// сдвиг идентификатора значения свойства (биты 12 - 15)
pub const PROPERTY_VALUE_SHIFT: u16 = 12;

/// таблица свойства Unicode - два параллельных массива одинаковой длины:
/// нижние границы диапазонов и упакованные размер / значение свойства
///
/// формат упакованного элемента:
///
/// ```text
/// 16               12                                   0
/// +-----------------------------------------------------+
/// |    значение     |          размер диапазона         |
/// +-----------------------------------------------------+
/// ```
///
/// размер хранится в младших 12 битах (диапазон - не более 4095 кодпоинтов),
/// идентификатор значения свойства - в старших 4 битах (не более 16 значений).
/// диапазоны не пересекаются, нижние границы строго возрастают
pub struct PropertyData<'a>
{
    /// нижние границы диапазонов, по возрастанию
    pub lower_bounds: &'a [u32],
    /// размер диапазона и идентификатор значения свойства
    pub props_and_size: &'a [u16],
}

impl<'a> PropertyData<'a>
{
    /// идентификатор значения свойства для кодпоинта; NO_VALUE - если кодпоинт
    /// не входит ни в один диапазон таблицы
    ///
    /// бинарный поиск последнего диапазона с нижней границей <= кодпоинта,
    /// O(log R), без аллокаций
    #[inline(always)]
    pub fn get(&self, code: u32) -> u8
    {
        let index = self.lower_bounds.partition_point(|&lower| lower <= code);

        if index == 0 {
            return NO_VALUE;
        }

        let lower = self.lower_bounds[index - 1];
        let data = self.props_and_size[index - 1];

        let size = (data & RANGE_SIZE_MASK) as u32;

        match code < lower + size {
            true => (data >> PROPERTY_VALUE_SHIFT) as u8,
            false => NO_VALUE,
        }
    }

    /// количество диапазонов в таблице
    #[inline]
    pub fn len(&self) -> usize
    {
        self.lower_bounds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.lower_bounds.is_empty()
    }
}
