use {
    criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main},
    e6model::{
        Blacklist,
        models::{Post, Posts, TagSet},
        schema,
    },
    serde_json::json,
    std::{hint::black_box, time::Duration},
};

fn make_post(id: usize, tags_per_group: usize) -> Post {
    let group = |name: &str| -> Vec<String> {
        (0..tags_per_group)
            .map(|i| format!("{}_{}_{}", name, id, i))
            .collect()
    };

    schema::from_value(json!({
        "id": id,
        "created_at": "2024-01-01T00:00:00.000-05:00",
        "rating": "s",
        "uploader_id": 1,
        "tags": {
            "general": group("general"),
            "species": group("species"),
            "character": group("character"),
            "copyright": group("copyright"),
            "artist": group("artist"),
            "invalid": [],
            "lore": [],
            "meta": group("meta"),
        }
    }))
    .unwrap()
}

fn make_blacklist(size: usize) -> Blacklist {
    (0..size)
        .map(|i| {
            if i % 2 == 0 {
                format!("general_{}_0", i)
            } else {
                format!("species_{}_0 meta_{}_1", i, i)
            }
        })
        .collect()
}

fn bench_intersects(c: &mut Criterion) {
    let mut group = c.benchmark_group("blacklist");
    let tags: TagSet = make_post(3, 20).all_tags().clone();

    for size in [1, 10, 100, 1000] {
        let list = make_blacklist(size);

        group.bench_with_input(BenchmarkId::new("intersects", size), &list, |b, list| {
            b.iter(|| black_box(list).intersects(black_box(&tags)))
        });
    }

    group.finish();
}

fn bench_all_tags(c: &mut Criterion) {
    let mut group = c.benchmark_group("post");

    for size in [5, 50, 500] {
        let post = make_post(1, size);

        group.bench_with_input(BenchmarkId::new("all_tags/first", size), &post, |b, post| {
            b.iter_batched(
                || post.clone(),
                |post| black_box(post.all_tags().len()),
                BatchSize::SmallInput,
            )
        });

        post.all_tags();
        group.bench_with_input(
            BenchmarkId::new("all_tags/memoized", size),
            &post,
            |b, post| b.iter(|| black_box(post.all_tags().len())),
        );
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let posts: Vec<Post> = (0..320).map(|i| make_post(i, 10)).collect();
    let list = make_blacklist(50);

    c.bench_function("posts/filter_blacklisted/320", |b| {
        b.iter_batched(
            || Posts {
                posts: posts.clone(),
            },
            |page| black_box(page.filter_blacklisted(&list).posts.len()),
            BatchSize::SmallInput,
        )
    });
}

criterion_group! {
    name = blacklist_bench;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(3))
        .sample_size(200);
    targets = bench_intersects, bench_all_tags, bench_filter
}

criterion_main!(blacklist_bench);
