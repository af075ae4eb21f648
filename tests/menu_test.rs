mod common;

use healthtracker::core::menu::compose_menu;

#[test]
fn test_default_menu_for_normal_bmi() {
    let menu = compose_menu(&common::ctx(65.0, &[]));
    assert_eq!(menu.date, "Hari Ini");
    assert_eq!(menu.breakfast.title, "🌅 Bubur Ayam Kampung Sehat");
    assert_eq!(menu.snacks.len(), 4);
    assert_eq!(menu.total_calories, "~1850 kkal");
    assert!(!menu.breakfast_alt.is_empty());
    assert!(!menu.drinks.is_empty());
}

#[test]
fn test_diabetes_replaces_meals() {
    let menu = compose_menu(&common::ctx(65.0, &["Diabetes"]));
    assert_eq!(menu.breakfast.title, "🌅 Sarapan Diabetes-Friendly");
    assert_eq!(menu.breakfast.meal_type, "breakfast");
    assert_eq!(menu.total_calories, "~1270 kkal");
    let plain = compose_menu(&common::ctx(65.0, &[]));
    assert_ne!(menu.health_tip, plain.health_tip);
}

#[test]
fn test_diabetes_replaces_snacks_drinks_and_fruits() {
    let menu = compose_menu(&common::ctx(65.0, &["Gula Darah Tinggi"]));

    let snack_titles: Vec<&str> = menu.snacks.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(snack_titles, vec!["🥒 Snack Pagi", "🍐 Snack Sore"]);
    assert_eq!(menu.snacks[0].foods, vec!["Mentimun", "Kacang almond 10 butir"]);
    assert_eq!(menu.snacks[1].calories, "~120 kkal");

    assert_eq!(
        menu.drinks,
        vec![
            "☕ Air putih 8-10 gelas/hari",
            "🍵 Teh hijau tanpa gula",
            "☕ Kopi hitam tanpa gula (maks 2 cangkir)",
            "🥛 Susu almond tanpa gula",
            "🍋 Air lemon hangat",
            "🥒 Infused water mentimun",
        ]
    );
    assert_eq!(
        menu.fruits,
        vec![
            "🍐 Pir - IG rendah",
            "🍎 Apel hijau - serat tinggi",
            "🫐 Blueberry - antioksidan",
            "🍓 Stroberi - IG rendah",
            "🥑 Alpukat - lemak sehat",
            "🍒 Ceri - antiinflamasi",
        ]
    );
    assert_eq!(menu.avoid_drinks.len(), 6);
    assert_eq!(menu.avoid_drinks[0], "🚫 Jus kemasan dengan gula");
    assert_eq!(menu.avoid_drinks[5], "🚫 Smoothie dengan es krim");
    assert_eq!(
        menu.avoid_fruits,
        vec![
            "🚫 Semangka - IG tinggi",
            "🚫 Nanas matang",
            "🚫 Mangga matang berlebihan",
            "🚫 Durian",
            "🚫 Buah kalengan sirup",
            "🚫 Kurma berlebihan",
        ]
    );
}

#[test]
fn test_hypertension_drinks_replace_base_list() {
    let expected = vec![
        "☕ Air putih 10+ gelas/hari",
        "🥥 Air kelapa - tinggi kalium",
        "🍵 Teh hibiscus - menurunkan TD",
        "🥤 Jus bit - vasodilator alami",
        "🍶 Susu skim",
        "🫖 Teh hijau tanpa gula",
    ];
    for weight in [65.0, 80.0] {
        let base = compose_menu(&common::ctx(weight, &[]));
        assert_eq!(base.drinks[0], "💧 Air putih 8-10 gelas/hari");

        let menu = compose_menu(&common::ctx(weight, &["Hipertensi"]));
        assert_eq!(menu.drinks, expected, "weight {}", weight);
        assert_eq!(menu.avoid_drinks[0], "🚫 Kopi >2 cangkir");
        assert_eq!(
            menu.avoid_fruits,
            vec!["🚫 Buah kalengan tinggi natrium", "🚫 Acar buah"]
        );
        // Snacks are not part of the hypertension override.
        assert_eq!(menu.snacks, base.snacks);
    }
}

#[test]
fn test_underweight_with_fever() {
    let menu = compose_menu(&common::ctx(50.0, &["Demam"]));
    // Fever only swaps dishes; titles and snacks come from the BMI override.
    assert_eq!(menu.breakfast.title, "🌅 Sarapan Tinggi Kalori");
    assert_eq!(menu.breakfast.foods[0], "Bubur ayam hangat");
    let snack_titles: Vec<&str> = menu.snacks.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(snack_titles, vec!["🥜 Snack Pagi", "🍌 Snack Sore"]);
    assert_eq!(menu.total_calories, "~1200 kkal");
}

#[test]
fn test_overweight_with_hypertension_keeps_bmi_calories() {
    let menu = compose_menu(&common::ctx(80.0, &["Hipertensi"]));
    assert_eq!(menu.breakfast.title, "🌅 Sarapan Rendah Kalori");
    assert_eq!(menu.breakfast.foods, vec!["Oatmeal", "Pisang", "Yogurt rendah lemak"]);
    assert_eq!(menu.total_calories, "~880 kkal");
    assert!(menu.health_tip.contains("Kurangi garam"));
}

#[test]
fn test_later_symptom_override_wins() {
    // Diabetes sets the calories first; fever comes last in the table.
    let menu = compose_menu(&common::ctx(65.0, &["Diabetes", "Flu"]));
    assert_eq!(menu.total_calories, "~1200 kkal");
    assert_eq!(menu.breakfast.title, "🌅 Sarapan Diabetes-Friendly");
    assert_eq!(menu.breakfast.foods[0], "Bubur ayam hangat");
}

#[test]
fn test_unknown_symptom_leaves_default() {
    let plain = compose_menu(&common::ctx(65.0, &[]));
    let menu = compose_menu(&common::ctx(65.0, &["Sakit Gigi"]));
    assert_eq!(plain, menu);
}

#[test]
fn test_compose_is_idempotent() {
    let ctx = common::ctx(95.0, &["Kolesterol", "Stres", "Insomnia"]);
    assert_eq!(compose_menu(&ctx), compose_menu(&ctx));
}
