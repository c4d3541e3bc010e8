//! Criterion benchmarks for the account setup checks.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use mail_address::{
    EmailAddress, EmailAddressParserConfig, EmailDomain, Port, is_legal_host_name,
    is_legal_host_name_or_ip, is_legal_ipv4_address, is_legal_ipv6_address, parse_email_address,
};

/// Benchmark: parse_email_address with varying address shapes
fn bench_email_address(c: &mut Criterion) {
    let mut group = c.benchmark_group("email_address");

    let test_cases = [
        ("minimal", "a@b.co".to_string()),
        ("typical", "alice.lastname@mail.domain.example".to_string()),
        ("quoted", "\"alice lastname\"@domain.example".to_string()),
        ("escaped", r#""a\"b\\c d"@domain.example"#.to_string()),
        (
            "max_length",
            format!(
                "{}@{}.{}.{}",
                "a".repeat(64),
                "b".repeat(63),
                "c".repeat(63),
                "d".repeat(61)
            ),
        ),
    ];

    for (name, address) in &test_cases {
        group.throughput(Throughput::Bytes(address.len() as u64));
        group.bench_with_input(BenchmarkId::new("default", name), address, |b, address| {
            b.iter(|| parse_email_address(black_box(address)));
        });
    }

    group.finish();
}

/// Benchmark: failing fast on malformed input
fn bench_email_address_errors(c: &mut Criterion) {
    let mut group = c.benchmark_group("email_address_errors");

    let test_cases = [
        ("local_part", ".invalid@domain.example"),
        ("domain", "user@metacode..biz"),
        ("address_literal", "user@[192.0.2.1]"),
        ("trailing", "user@domain.example#"),
    ];

    for (name, address) in test_cases {
        group.bench_with_input(BenchmarkId::new("default", name), &address, |b, address| {
            b.iter(|| parse_email_address(black_box(address)));
        });
    }

    group.finish();
}

/// Benchmark: policy configs on the same input
fn bench_configs(c: &mut Criterion) {
    let mut group = c.benchmark_group("configs");

    let address = "\"alice lastname\"@domain.example";
    let configs = [
        ("default", EmailAddressParserConfig::DEFAULT),
        ("relaxed", EmailAddressParserConfig::RELAXED),
        ("limited", EmailAddressParserConfig::LIMITED),
    ];

    for (name, config) in configs {
        group.bench_with_input(BenchmarkId::new("quoted", name), &config, |b, config| {
            b.iter(|| EmailAddress::parse(black_box(address), config));
        });
    }

    group.finish();
}

/// Benchmark: EmailDomain::parse at varying label counts
fn bench_domain(c: &mut Criterion) {
    let mut group = c.benchmark_group("email_domain");

    for labels in [1, 2, 4, 8] {
        let domain = (0..labels)
            .map(|i| format!("label-{i}"))
            .collect::<Vec<_>>()
            .join(".");
        group.throughput(Throughput::Bytes(domain.len() as u64));
        group.bench_with_input(BenchmarkId::new("labels", labels), &domain, |b, domain| {
            b.iter(|| EmailDomain::parse(black_box(domain)));
        });
    }

    group.finish();
}

/// Benchmark: host name and IP checks
fn bench_hostname(c: &mut Criterion) {
    let mut group = c.benchmark_group("hostname");

    group.bench_function("ipv4", |b| {
        b.iter(|| is_legal_ipv4_address(black_box("192.168.100.200")));
    });

    let ipv6_cases = [
        ("loopback", "::1"),
        ("compressed", "2001:db8::8a2e:370:7334"),
        ("full", "2001:0db8:85a3:0000:0000:8a2e:0370:7334"),
        ("embedded_ipv4", "::ffff:192.168.1.1"),
    ];
    for (name, ip) in ipv6_cases {
        group.bench_with_input(BenchmarkId::new("ipv6", name), &ip, |b, ip| {
            b.iter(|| is_legal_ipv6_address(black_box(ip)));
        });
    }

    group.bench_function("host_name", |b| {
        b.iter(|| is_legal_host_name(black_box("imap.mail.domain.example.")));
    });

    // Host names go through both IP checks first
    group.bench_function("host_name_or_ip", |b| {
        b.iter(|| is_legal_host_name_or_ip(black_box("smtp.domain.example")));
    });

    group.finish();
}

/// Benchmark: Port from user input
fn bench_port(c: &mut Criterion) {
    let mut group = c.benchmark_group("port");

    group.bench_function("new", |b| {
        b.iter(|| Port::new(black_box(993)));
    });

    group.bench_function("from_str", |b| {
        b.iter(|| black_box("993").parse::<Port>());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_email_address,
    bench_email_address_errors,
    bench_configs,
    bench_domain,
    bench_hostname,
    bench_port,
);
criterion_main!(benches);
