use criterion::{black_box, criterion_group, criterion_main, Criterion};
use unicode_properties::PropertyData;

/// синтетическая таблица: 1024 диапазона по 0x100 кодпоинтов с зазорами,
/// идентификаторы значений - по кругу 0..15
fn synthetic_table() -> (Vec<u32>, Vec<u16>)
{
    let mut lower_bounds: Vec<u32> = Vec::with_capacity(1024);
    let mut props_and_size: Vec<u16> = Vec::with_capacity(1024);

    for i in 0 .. 1024u32 {
        lower_bounds.push(i * 0x400);
        props_and_size.push(0x100 | (((i % 16) as u16) << 12));
    }

    (lower_bounds, props_and_size)
}

/// поиск значения свойства для каждого кодпоинта Unicode
fn lookup(c: &mut Criterion)
{
    let (lower_bounds, props_and_size) = synthetic_table();

    let data = PropertyData {
        lower_bounds: &lower_bounds,
        props_and_size: &props_and_size,
    };

    c.bench_function("lookup", |b| {
        b.iter(|| {
            let mut sum = 0u64;

            for code in 0 ..= 0x10FFFFu32 {
                sum += data.get(black_box(code)) as u64;
            }

            sum
        })
    });
}

criterion_group!(benches, lookup);
criterion_main!(benches);
