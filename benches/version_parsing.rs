// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use android_sdk_info::scanner::VersionedDirectoryScanner;
use android_sdk_info::version::Version;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::fs;
use tempfile::TempDir;

pub fn bench_version_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("version_parsing");

    let names = vec![
        ("single", "35"),
        ("two_part", "11.0"),
        ("three_part", "34.0.0"),
        ("four_part", "1.2.3.4"),
        ("preview", "UpsideDownCake"),
        ("almost_version", "30.0.3-rc1"),
    ];

    for (name, value) in names {
        group.bench_with_input(BenchmarkId::new("parse", name), &value, |b, v| {
            b.iter(|| Version::parse(black_box(v)))
        });
    }

    let a = Version::new(30, 0, 3);
    let b_version = Version::from_components(vec![30, 0]);
    group.bench_function("compare_padded", |b| {
        b.iter(|| black_box(&a).cmp(black_box(&b_version)))
    });

    group.finish();
}

pub fn bench_directory_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("directory_scan");

    let temp_dir = TempDir::new().unwrap();
    let build_tools = temp_dir.path().join("build-tools");
    for major in 19..36 {
        for patch in 0..4 {
            fs::create_dir_all(build_tools.join(format!("{major}.0.{patch}"))).unwrap();
        }
    }
    fs::create_dir_all(build_tools.join("preview")).unwrap();

    let scanner = VersionedDirectoryScanner::new();
    group.bench_function("build_tools_68_entries", |b| {
        b.iter(|| scanner.scan(black_box(&build_tools)).count())
    });

    group.finish();
}

criterion_group!(benches, bench_version_parsing, bench_directory_scan);
criterion_main!(benches);
