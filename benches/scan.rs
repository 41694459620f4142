use criterion::{criterion_group, criterion_main, Criterion, black_box};

use regionscan::scan::{
    BlockPos, ClassifierSet, Connectivity, ExpandWhere, RegionScanner, SparseGrid, scan_many,
};

/// Solid cube of stone with side `size`, minimum corner at the origin
fn stone_cube(size: i32) -> SparseGrid<u8> {
    let mut grid = SparseGrid::new(0u8);
    grid.fill_box(BlockPos::ORIGIN, BlockPos::new(size - 1, size - 1, size - 1), 1);
    grid
}

fn classifiers() -> ClassifierSet<u8> {
    let mut set = ClassifierSet::new();
    set.add("stone", |block: &u8| *block == 1);
    set.add("air", |block: &u8| *block == 0);
    set
}

fn bench_scan_cube(c: &mut Criterion, size: i32, connectivity: Connectivity, name: &str) {
    let grid = stone_cube(size);
    let set = classifiers();

    c.bench_function(name, |b| {
        b.iter(|| {
            let rule = ExpandWhere::new(connectivity, |block: &u8| *block == 1);
            let mut scanner = RegionScanner::new(BlockPos::ORIGIN, rule, set.clone());
            scanner.search(black_box(&grid));
            scanner.visited_count()
        });
    });
}

fn bench_scan_faces_16(c: &mut Criterion) {
    bench_scan_cube(c, 16, Connectivity::Faces, "scan_faces_16");
}

fn bench_scan_faces_32(c: &mut Criterion) {
    bench_scan_cube(c, 32, Connectivity::Faces, "scan_faces_32");
}

fn bench_scan_corners_16(c: &mut Criterion) {
    bench_scan_cube(c, 16, Connectivity::Corners, "scan_corners_16");
}

fn bench_scan_many_8_origins(c: &mut Criterion) {
    // Eight isolated 8³ blocks, one origin each
    let mut grid = SparseGrid::new(0u8);
    let mut origins = Vec::new();
    for i in 0..8 {
        let min = BlockPos::new(i * 16, 0, 0);
        grid.fill_box(min, BlockPos::new(min.x + 7, 7, 7), 1);
        origins.push(min);
    }
    let set = classifiers();
    let rule = |block: &u8| if *block == 1 { Connectivity::Faces.offsets().to_vec() } else { Vec::new() };

    c.bench_function("scan_many_8_origins", |b| {
        b.iter(|| scan_many(black_box(&origins), &rule, &set, &grid).map(|s| s.visited_count()));
    });
}

fn init_logging(_c: &mut Criterion) {
    regionscan::core::logging::try_init();
}

criterion_group!(
    benches,
    init_logging,
    bench_scan_faces_16,
    bench_scan_faces_32,
    bench_scan_corners_16,
    bench_scan_many_8_origins,
);
criterion_main!(benches);
