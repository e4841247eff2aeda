use criterion::{Criterion, criterion_group, criterion_main};
use domain::{EmailAddress, LotId, StringValueObject};

fn bench_lot_id_parse(c: &mut Criterion) {
    c.bench_function("domain/lot_id_parse", |b| {
        b.iter(|| LotId::parse("  LOT-123 ").unwrap());
    });
}

fn bench_lot_id_try_create_invalid(c: &mut Criterion) {
    c.bench_function("domain/lot_id_try_create_invalid", |b| {
        b.iter(|| LotId::try_create("lot-12345").unwrap_err());
    });
}

fn bench_email_parse(c: &mut Criterion) {
    c.bench_function("domain/email_parse", |b| {
        b.iter(|| EmailAddress::parse("First.Last+tag@Sub.Example.org").unwrap());
    });
}

criterion_group!(
    benches,
    bench_lot_id_parse,
    bench_lot_id_try_create_invalid,
    bench_email_parse
);
criterion_main!(benches);
