use criterion::{black_box, criterion_group, criterion_main, Criterion};
use formgate_core::form::FormController;
use formgate_core::schema::{FieldName, FormValues, SignupData, SignupSchema};

fn values(name: &str, email: &str, password: &str, confirm: &str) -> FormValues {
    FormValues::new()
        .with(FieldName::Name, name)
        .with(FieldName::Email, email)
        .with(FieldName::Password, password)
        .with(FieldName::ConfirmPassword, confirm)
}

fn bench_schema(c: &mut Criterion) {
    let schema = SignupSchema::new();
    let valid = values("Taro", "a@b.com", "longpassword", "longpassword");
    let invalid = values("", "bad", "short", "x");

    c.bench_function("schema_validate_valid", |b| {
        b.iter(|| schema.validate(black_box(&valid)))
    });
    c.bench_function("schema_validate_invalid", |b| {
        b.iter(|| schema.validate(black_box(&invalid)))
    });
}

fn bench_controller(c: &mut Criterion) {
    c.bench_function("controller_keystrokes", |b| {
        b.iter(|| {
            let mut form = FormController::new(|_: SignupData| {});
            let mut typed = String::new();
            for ch in "first.last@example.com".chars() {
                typed.push(ch);
                form.on_field_change(FieldName::Email, typed.as_str());
            }
            black_box(form.is_valid())
        })
    });
}

criterion_group!(benches, bench_schema, bench_controller);
criterion_main!(benches);
