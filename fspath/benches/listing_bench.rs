use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fspath::{ListOptions, Path, SortOrder, WalkOptions};

/// A directory with `dirs` subdirectories, each holding `files` files.
fn populate(dirs: usize, files: usize) -> (tempfile::TempDir, Path) {
    let scratch = tempfile::tempdir().unwrap();
    let root = Path::from(scratch.path());
    for d in 0..dirs {
        let dir = (&root / format!("dir_{d:03}")).mkdir().unwrap();
        for f in 0..files {
            (&dir / format!("file_{f:03}.txt")).touch().unwrap();
        }
    }
    (scratch, root)
}

fn bench_ls(c: &mut Criterion) {
    let mut group = c.benchmark_group("ls");
    let (_scratch, root) = populate(1, 200);
    let dir = &root / "dir_000";

    group.bench_function("dirs_first", |b| {
        b.iter(|| black_box(&dir).ls().unwrap());
    });

    let lexical = ListOptions::new().with_sort(SortOrder::Lexical);
    group.bench_function("lexical", |b| {
        b.iter(|| black_box(&dir).ls_with(&lexical).unwrap());
    });

    let filtered = ListOptions::new().with_pattern("file_1??.txt");
    group.bench_function("pattern", |b| {
        b.iter(|| black_box(&dir).ls_with(&filtered).unwrap());
    });

    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");

    for (dirs, files) in [(10, 10), (20, 50)] {
        let (_scratch, root) = populate(dirs, files);
        let options = WalkOptions::new().recursive(true);
        group.bench_with_input(
            BenchmarkId::new("recursive", dirs * files),
            &root,
            |b, root| {
                b.iter(|| root.walk_with(options.clone()).count());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_ls, bench_walk);
criterion_main!(benches);
