use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gi_core::Image;
use gi_filter::gaussian_blur;

fn bench_gaussian_blur(c: &mut Criterion) {
    let width = 1280usize;
    let height = 1024usize;
    let mut img = Image::new(width, height).expect("valid image");
    for y in 0..height {
        for (x, px) in img.row_mut(y).iter_mut().enumerate() {
            *px = ((x + y * width) % 251) as u8;
        }
    }

    c.bench_function("gaussian_blur_sigma0.8_k3_1280x1024", |b| {
        b.iter(|| {
            let mut work = img.clone();
            gaussian_blur(black_box(&mut work), 0.8, 3);
            black_box(work);
        });
    });

    c.bench_function("gaussian_blur_sigma2_k9_1280x1024", |b| {
        b.iter(|| {
            let mut work = img.clone();
            gaussian_blur(black_box(&mut work), 2.0, 9);
            black_box(work);
        });
    });
}

criterion_group!(benches, bench_gaussian_blur);
criterion_main!(benches);
