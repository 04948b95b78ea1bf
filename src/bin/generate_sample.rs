use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Price jittered by up to ±`spread` of `base`, rounded to kopecks.
    fn price_around(&mut self, base: f64, spread: f64) -> f64 {
        let factor = 1.0 + spread * (2.0 * self.next_f64() - 1.0);
        (base * factor * 100.0).round() / 100.0
    }
}

/// (product, base price, package size)
const PRODUCTS: [(&str, f64, f64); 8] = [
    ("Молоко 3,2%", 89.0, 0.93),
    ("Молоко ультрапастеризованное", 105.0, 1.0),
    ("Кефир 1%", 79.0, 0.9),
    ("Сыр Российский", 210.0, 0.2),
    ("Масло сливочное 82,5%", 189.0, 0.18),
    ("Гречка ядрица", 95.0, 0.9),
    ("Рис круглозёрный", 85.0, 0.8),
    ("Сахар", 72.0, 1.0),
];

/// Column order of a generated file.
#[derive(Clone, Copy)]
enum Layout {
    NamePriceWeight,
    CodeNamePriceWeight,
    NoWeight,
}

struct Shop {
    file: &'static str,
    header: [&'static str; 4],
    layout: Layout,
}

const SHOPS: [Shop; 3] = [
    Shop {
        file: "price_magnit.csv",
        header: ["Товар", "Цена", "Вес", "Производитель"],
        layout: Layout::NamePriceWeight,
    },
    Shop {
        file: "price_lenta.csv",
        header: ["Артикул", "Наименование", "Розница", "Масса"],
        layout: Layout::CodeNamePriceWeight,
    },
    // No weight column: the loader skips this file.
    Shop {
        file: "price_outdated.csv",
        header: ["Продукт", "Цена", "Страна", "Остаток"],
        layout: Layout::NoWeight,
    },
];

fn write_shop(dir: &Path, shop: &Shop, rng: &mut SimpleRng) -> Result<usize> {
    let path = dir.join(shop.file);
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(shop.header)?;

    let mut written = 0;
    for (i, &(name, base, size)) in PRODUCTS.iter().enumerate() {
        // Each shop stocks roughly three quarters of the range.
        if rng.next_f64() < 0.25 {
            continue;
        }
        let price = rng.price_around(base, 0.15).to_string();
        let size = size.to_string();
        let code = format!("A-{i:03}");
        let (price, size) = (price.as_str(), size.as_str());
        let record: [&str; 4] = match shop.layout {
            Layout::NamePriceWeight => [name, price, size, "РФ"],
            Layout::CodeNamePriceWeight => [code.as_str(), name, price, size],
            Layout::NoWeight => [name, price, "РФ", "12"],
        };
        writer.write_record(record)?;
        written += 1;
    }

    writer.flush()?;
    Ok(written)
}

fn main() -> Result<()> {
    let dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("PRICE"));
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut rng = SimpleRng::new(42);
    for shop in &SHOPS {
        let rows = write_shop(&dir, shop, &mut rng)?;
        println!("Wrote {rows} rows to {}", dir.join(shop.file).display());
    }
    Ok(())
}
