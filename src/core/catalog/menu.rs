use crate::core::matcher::Trigger;
use crate::core::rules::strings;
use crate::models::health::BmiCategory;
use crate::models::recommendation::{DailyMenu, MealPlan};
use crate::models::symptom::SymptomKind as S;

pub struct MealTemplate {
    pub meal_type: &'static str,
    pub title: &'static str,
    pub foods: &'static [&'static str],
    pub ingredients: &'static [&'static str],
    pub recipe: &'static str,
    pub calories: &'static str,
    pub description: &'static str,
    pub estimated_cost: &'static str,
}

impl MealTemplate {
    /// Blank slot for struct-update syntax in the tables below.
    const BLANK: Self = Self {
        meal_type: "",
        title: "",
        foods: &[],
        ingredients: &[],
        recipe: "",
        calories: "",
        description: "",
        estimated_cost: "",
    };

    pub fn build(&self) -> MealPlan {
        MealPlan {
            meal_type: self.meal_type.to_string(),
            title: self.title.to_string(),
            foods: strings(self.foods),
            ingredients: strings(self.ingredients),
            recipe: self.recipe.to_string(),
            calories: self.calories.to_string(),
            description: self.description.to_string(),
            estimated_cost: self.estimated_cost.to_string(),
        }
    }
}

fn build_all(meals: &[MealTemplate]) -> Vec<MealPlan> {
    meals.iter().map(MealTemplate::build).collect()
}

pub struct MenuTemplate {
    pub date: &'static str,
    pub health_tip: &'static str,
    pub breakfast: MealTemplate,
    pub breakfast_alt: &'static [MealTemplate],
    pub lunch: MealTemplate,
    pub lunch_alt: &'static [MealTemplate],
    pub dinner: MealTemplate,
    pub dinner_alt: &'static [MealTemplate],
    pub snacks: &'static [MealTemplate],
    pub drinks: &'static [&'static str],
    pub fruits: &'static [&'static str],
    pub avoid_drinks: &'static [&'static str],
    pub avoid_fruits: &'static [&'static str],
    pub total_calories: &'static str,
    pub total_estimated_cost: &'static str,
}

impl MenuTemplate {
    pub fn build(&self) -> DailyMenu {
        DailyMenu {
            date: self.date.to_string(),
            health_tip: self.health_tip.to_string(),
            breakfast: self.breakfast.build(),
            breakfast_alt: build_all(self.breakfast_alt),
            lunch: self.lunch.build(),
            lunch_alt: build_all(self.lunch_alt),
            dinner: self.dinner.build(),
            dinner_alt: build_all(self.dinner_alt),
            snacks: build_all(self.snacks),
            drinks: strings(self.drinks),
            fruits: strings(self.fruits),
            avoid_drinks: strings(self.avoid_drinks),
            avoid_fruits: strings(self.avoid_fruits),
            total_calories: self.total_calories.to_string(),
            total_estimated_cost: self.total_estimated_cost.to_string(),
        }
    }
}

/// Change to one main-meal slot.
pub enum MealEdit {
    /// Swap the whole meal.
    Replace(MealTemplate),
    /// Keep the meal, rewrite its dish list and recipe.
    Dishes {
        foods: &'static [&'static str],
        recipe: &'static str,
    },
}

impl MealEdit {
    fn apply(&self, meal: &mut MealPlan) {
        match self {
            Self::Replace(template) => *meal = template.build(),
            Self::Dishes { foods, recipe } => {
                meal.foods = strings(foods);
                meal.recipe = recipe.to_string();
            }
        }
    }
}

/// Fields a rule overwrites. `None` leaves the current value alone.
pub struct MenuPatch {
    pub health_tip: Option<&'static str>,
    pub breakfast: Option<MealEdit>,
    pub lunch: Option<MealEdit>,
    pub dinner: Option<MealEdit>,
    pub snacks: Option<&'static [MealTemplate]>,
    pub drinks: Option<&'static [&'static str]>,
    pub fruits: Option<&'static [&'static str]>,
    pub avoid_drinks: Option<&'static [&'static str]>,
    pub avoid_fruits: Option<&'static [&'static str]>,
    pub total_calories: Option<&'static str>,
    pub total_estimated_cost: Option<&'static str>,
}

impl MenuPatch {
    pub const EMPTY: Self = Self {
        health_tip: None,
        breakfast: None,
        lunch: None,
        dinner: None,
        snacks: None,
        drinks: None,
        fruits: None,
        avoid_drinks: None,
        avoid_fruits: None,
        total_calories: None,
        total_estimated_cost: None,
    };

    pub fn apply(&self, menu: &mut DailyMenu) {
        if let Some(tip) = self.health_tip {
            menu.health_tip = tip.to_string();
        }
        if let Some(edit) = &self.breakfast {
            edit.apply(&mut menu.breakfast);
        }
        if let Some(edit) = &self.lunch {
            edit.apply(&mut menu.lunch);
        }
        if let Some(edit) = &self.dinner {
            edit.apply(&mut menu.dinner);
        }
        if let Some(snacks) = self.snacks {
            menu.snacks = build_all(snacks);
        }
        if let Some(drinks) = self.drinks {
            menu.drinks = strings(drinks);
        }
        if let Some(fruits) = self.fruits {
            menu.fruits = strings(fruits);
        }
        if let Some(avoid) = self.avoid_drinks {
            menu.avoid_drinks = strings(avoid);
        }
        if let Some(avoid) = self.avoid_fruits {
            menu.avoid_fruits = strings(avoid);
        }
        if let Some(calories) = self.total_calories {
            menu.total_calories = calories.to_string();
        }
        if let Some(cost) = self.total_estimated_cost {
            menu.total_estimated_cost = cost.to_string();
        }
    }
}

pub struct MenuOverride {
    pub name: &'static str,
    pub trigger: Trigger,
    pub patch: MenuPatch,
}

pub static DEFAULT_MENU: MenuTemplate = MenuTemplate {
    date: "Hari Ini",
    health_tip: "💡 Tips: Makan dalam porsi seimbang dengan prinsip 'Isi Piringku' - 1/3 karbohidrat, 1/3 sayuran, 1/3 protein.",
    breakfast: MealTemplate {
        meal_type: "breakfast",
        title: "🌅 Bubur Ayam Kampung Sehat",
        foods: &["Bubur ayam kampung", "Telur setengah matang", "Jus jeruk segar"],
        ingredients: &["Beras 100g", "Ayam kampung 100g", "Daun bawang 2 batang", "Bawang goreng 1 sdm", "Kecap manis 1 sdt", "Kerupuk emping", "Telur 1 butir", "Jeruk 2 buah"],
        description: "Sarapan tradisional Indonesia yang hangat dan bergizi",
        calories: "~450 kkal",
        estimated_cost: "Rp 18.000 - 25.000",
        recipe: "1. Masak bubur dengan perbandingan 1:6 air hingga lembut. 2. Rebus ayam, suwir halus. 3. Taruh bubur di mangkuk, tambahkan ayam suwir, daun bawang, bawang goreng. 4. Siram kecap manis, sajikan dengan telur setengah matang dan kerupuk.",
    },
    lunch: MealTemplate {
        meal_type: "lunch",
        title: "🍱 Nasi Liwet Komplit Sehat",
        foods: &["Nasi liwet", "Ayam goreng bumbu kuning", "Tempe mendoan", "Lalapan & sambal matah", "Sayur asem"],
        ingredients: &["Beras 200g", "Santan encer 200ml", "Daun salam 2 lembar", "Serai 1 batang", "Ayam 1 potong paha", "Tempe 100g", "Timun, kemangi, kol", "Tomat, bawang merah, cabai", "Sayur asem (kangkung, jagung, labu)"],
        description: "Menu makan siang Indonesia yang lengkap dan seimbang",
        calories: "~650 kkal",
        estimated_cost: "Rp 25.000 - 35.000",
        recipe: "1. Masak nasi dengan santan encer, daun salam, serai. 2. Goreng ayam dengan bumbu kuning (kunyit, bawang). 3. Balut tempe tipis dengan tepung berbumbu, goreng. 4. Iris tomat, bawang merah, cabai untuk sambal matah. 5. Rebus sayur asem dengan asam jawa.",
    },
    dinner: MealTemplate {
        meal_type: "dinner",
        title: "🌙 Pepes Ikan & Sayur Bening",
        foods: &["Pepes ikan mas", "Nasi merah", "Sayur bening bayam", "Tahu bacem"],
        ingredients: &["Ikan mas 200g", "Bumbu pepes (kemangi, daun salam, lengkuas)", "Nasi merah 150g", "Bayam 100g", "Jagung manis 1/2 buah", "Tahu 100g", "Kecap manis, gula jawa"],
        description: "Makan malam sehat rendah lemak dengan protein ikan",
        calories: "~450 kkal",
        estimated_cost: "Rp 30.000 - 40.000",
        recipe: "1. Balut ikan dengan bumbu pepes dalam daun pisang, kukus 20 menit. 2. Rebus sayur bening dari bayam dan jagung. 3. Bacem tahu dengan kecap manis dan gula jawa. 4. Sajikan dengan nasi merah hangat.",
    },
    snacks: &[
        MealTemplate {
            meal_type: "snack",
            title: "🍌 Snack Pagi: Pisang Rebus & Kacang Hijau",
            foods: &["Pisang rebus", "Bubur kacang hijau"],
            ingredients: &["Pisang kepok 2 buah", "Kacang hijau 50g", "Gula aren 2 sdm", "Santan encer 100ml"],
            description: "Camilan tradisional tinggi energi dan protein nabati",
            calories: "~200 kkal",
            estimated_cost: "Rp 8.000 - 12.000",
            recipe: "Rebus pisang 10 menit. Masak kacang hijau dengan gula aren dan santan hingga lembut.",
        },
        MealTemplate {
            meal_type: "snack",
            title: "🥜 Snack Siang: Gado-Gado Mini",
            foods: &["Gado-gado porsi kecil"],
            ingredients: &["Tahu goreng 50g", "Tempe goreng 50g", "Kol, tauge, kacang panjang rebus", "Bumbu kacang 3 sdm", "Kerupuk"],
            description: "Makanan bergizi dengan protein nabati dan sayuran",
            calories: "~180 kkal",
            estimated_cost: "Rp 10.000 - 15.000",
            recipe: "Rebus sayuran, potong tahu tempe. Siram dengan bumbu kacang, tabur kerupuk.",
        },
        MealTemplate {
            meal_type: "snack",
            title: "🍠 Snack Sore: Kolak Pisang Ubi",
            foods: &["Kolak pisang ubi"],
            ingredients: &["Pisang raja 1 buah", "Ubi ungu 50g", "Gula aren 2 sdm", "Santan 100ml", "Daun pandan"],
            description: "Dessert tradisional yang menghangatkan tubuh",
            calories: "~180 kkal",
            estimated_cost: "Rp 8.000 - 12.000",
            recipe: "Rebus santan dengan gula aren dan pandan. Masukkan ubi dan pisang, masak hingga empuk.",
        },
        MealTemplate {
            meal_type: "snack",
            title: "🥤 Snack Malam: Es Buah Segar",
            foods: &["Es buah campur"],
            ingredients: &["Semangka", "Melon", "Pepaya", "Nata de coco", "Susu kental manis 1 sdm", "Es batu"],
            description: "Camilan segar tinggi vitamin dan serat",
            calories: "~120 kkal",
            estimated_cost: "Rp 10.000 - 15.000",
            recipe: "Potong buah-buahan, campur dengan nata de coco, siram susu, tambahkan es.",
        },
    ],
    drinks: &[
        "💧 Air putih 8-10 gelas/hari",
        "🍵 Teh hijau/jahe tanpa gula",
        "🥛 Susu segar/kedelai",
        "🥥 Air kelapa muda",
        "🍋 Jus lemon-madu hangat",
        "🫖 Wedang uwuh (herbal Jawa)",
        "🌿 Jamu kunyit asam",
        "🍊 Jus jeruk segar tanpa gula",
    ],
    fruits: &[
        "🍌 Pisang - sumber kalium & energi",
        "🍎 Apel - tinggi serat pectin",
        "🥭 Pepaya - enzim pencernaan",
        "🍊 Jeruk - vitamin C",
        "🍉 Semangka - hidrasi",
        "🫐 Blueberry - antioksidan",
        "🥑 Alpukat - lemak sehat & serat",
        "🍇 Anggur merah - resveratrol",
        "🥝 Kiwi - vitamin C & serat",
        "🍐 Pir - indeks glikemik rendah",
        "🍓 Stroberi - antioksidan",
        "🥥 Kelapa muda - elektrolit alami",
    ],
    avoid_drinks: &[
        "🚫 Minuman bersoda & energi",
        "🚫 Alkohol berlebihan",
        "🚫 Kopi >3 cangkir/hari",
        "🚫 Teh manis berlebihan",
        "🚫 Jus kemasan dengan pemanis",
        "🚫 Susu full cream (jika kolesterol tinggi)",
    ],
    avoid_fruits: &[
        "🚫 Buah kalengan dengan sirup gula",
        "🚫 Durian berlebihan (tinggi kalori)",
        "🚫 Nangka berlebihan (tinggi gula)",
    ],
    total_calories: "~1850 kkal",
    total_estimated_cost: "Rp 89.000 - 139.000",
    breakfast_alt: &[
        MealTemplate {
            meal_type: "breakfast",
            title: "🥣 Oatmeal Pisang Madu",
            foods: &["Oatmeal dengan pisang", "Telur rebus", "Teh hijau"],
            ingredients: &["Oatmeal 4 sdm", "Pisang 1 buah", "Madu 1 sdm", "Susu 200ml", "Telur 2 butir"],
            description: "Sarapan tinggi serat untuk energi stabil",
            calories: "~400 kkal",
            estimated_cost: "Rp 15.000 - 20.000",
            recipe: "Masak oatmeal dengan susu, tambahkan pisang dan madu. Rebus telur 10 menit.",
        },
        MealTemplate {
            meal_type: "breakfast",
            title: "🍳 Nasi Uduk Betawi",
            foods: &["Nasi uduk", "Telur balado", "Tempe orek", "Bihun goreng"],
            ingredients: &["Beras 150g", "Santan 100ml", "Serai", "Daun salam", "Telur 2 butir", "Tempe 50g"],
            description: "Sarapan khas Betawi yang mengenyangkan",
            calories: "~500 kkal",
            estimated_cost: "Rp 12.000 - 18.000",
            recipe: "Masak nasi dengan santan dan rempah. Goreng telur, buat balado. Orek tempe manis.",
        },
        MealTemplate {
            meal_type: "breakfast",
            title: "🥪 Roti Bakar Telur Keju",
            foods: &["Roti bakar", "Telur orak-arik", "Keju slice", "Jus jeruk"],
            ingredients: &["Roti tawar 2 lembar", "Telur 2 butir", "Keju 1 slice", "Mentega", "Jeruk 2 buah"],
            description: "Sarapan praktis tinggi protein",
            calories: "~450 kkal",
            estimated_cost: "Rp 15.000 - 22.000",
            recipe: "Panggang roti dengan mentega. Orak-arik telur, taruh keju di atas roti panas.",
        },
        MealTemplate {
            meal_type: "breakfast",
            title: "🍜 Lontong Sayur",
            foods: &["Lontong", "Sayur labu santan", "Telur rebus", "Kerupuk"],
            ingredients: &["Lontong 2 potong", "Labu siam 100g", "Tahu 50g", "Santan 200ml", "Telur 1 butir"],
            description: "Sarapan tradisional Jawa yang hangat",
            calories: "~480 kkal",
            estimated_cost: "Rp 10.000 - 15.000",
            recipe: "Masak sayur labu dengan santan dan bumbu. Potong lontong, sajikan dengan telur rebus.",
        },
        MealTemplate {
            meal_type: "breakfast",
            title: "🥞 Pancake Pisang Oat",
            foods: &["Pancake pisang oat", "Madu", "Buah segar"],
            ingredients: &["Oat 50g", "Pisang 2 buah", "Telur 1 butir", "Susu 100ml", "Madu 2 sdm"],
            description: "Sarapan sehat tanpa tepung terigu",
            calories: "~380 kkal",
            estimated_cost: "Rp 12.000 - 18.000",
            recipe: "Blender pisang, oat, telur, susu. Panggang seperti pancake. Sajikan dengan madu.",
        },
    ],
    lunch_alt: &[
        MealTemplate {
            meal_type: "lunch",
            title: "🍛 Nasi Padang Sehat",
            foods: &["Nasi putih", "Rendang daging", "Sayur daun singkong", "Sambal hijau"],
            ingredients: &["Nasi 200g", "Daging sapi 100g", "Daun singkong 100g", "Cabai hijau", "Bumbu rendang"],
            description: "Menu Padang dengan porsi protein tinggi",
            calories: "~650 kkal",
            estimated_cost: "Rp 25.000 - 35.000",
            recipe: "Masak rendang dengan bumbu tradisional. Rebus daun singkong dengan santan.",
        },
        MealTemplate {
            meal_type: "lunch",
            title: "🍲 Soto Ayam Lamongan",
            foods: &["Soto ayam kuah kuning", "Nasi", "Telur", "Koya", "Sambal"],
            ingredients: &["Ayam 150g", "Kunyit, lengkuas, serai", "Nasi 150g", "Telur 1 butir", "Koya (kerupuk bubuk)"],
            description: "Sup hangat khas Jawa Timur yang menyegarkan",
            calories: "~500 kkal",
            estimated_cost: "Rp 18.000 - 25.000",
            recipe: "Rebus ayam dengan bumbu kuning. Suwir ayam, sajikan dengan kuah kuning, nasi, koya.",
        },
        MealTemplate {
            meal_type: "lunch",
            title: "🥗 Gado-Gado Jakarta",
            foods: &["Gado-gado sayuran", "Lontong", "Telur", "Kerupuk emping"],
            ingredients: &["Kol, tauge, kacang panjang, kentang", "Lontong 2 potong", "Telur 1 butir", "Bumbu kacang 100g"],
            description: "Salad Indonesia tinggi protein nabati",
            calories: "~550 kkal",
            estimated_cost: "Rp 15.000 - 22.000",
            recipe: "Rebus sayuran dan kentang. Potong lontong. Siram dengan bumbu kacang kental.",
        },
        MealTemplate {
            meal_type: "lunch",
            title: "🍱 Ayam Geprek Sambal Matah",
            foods: &["Ayam geprek", "Nasi", "Sambal matah", "Lalapan"],
            ingredients: &["Dada ayam 150g", "Tepung bumbu", "Nasi 200g", "Bawang merah, cabai, jeruk limau"],
            description: "Ayam crispy dengan sambal segar Bali",
            calories: "~600 kkal",
            estimated_cost: "Rp 18.000 - 25.000",
            recipe: "Goreng ayam crispy, geprek. Buat sambal matah dari bawang iris dan cabai rawit.",
        },
        MealTemplate {
            meal_type: "lunch",
            title: "🐟 Ikan Bakar Jimbaran",
            foods: &["Ikan kakap bakar", "Nasi", "Sambal plecing", "Sayur kangkung"],
            ingredients: &["Ikan kakap 250g", "Bumbu bakar", "Nasi 200g", "Kangkung 100g", "Sambal tomat"],
            description: "Ikan bakar segar khas Bali dengan sambal pedas",
            calories: "~520 kkal",
            estimated_cost: "Rp 30.000 - 45.000",
            recipe: "Bakar ikan dengan bumbu bali. Rebus kangkung, sajikan dengan sambal plecing.",
        },
    ],
    dinner_alt: &[
        MealTemplate {
            meal_type: "dinner",
            title: "🍜 Mie Ayam Bakso",
            foods: &["Mie ayam", "Bakso sapi", "Pangsit goreng", "Sawi hijau"],
            ingredients: &["Mie telur 150g", "Ayam cincang 100g", "Bakso 4 butir", "Sawi 50g", "Kaldu ayam"],
            description: "Comfort food Indonesia yang menghangatkan",
            calories: "~480 kkal",
            estimated_cost: "Rp 15.000 - 22.000",
            recipe: "Rebus mie, tumis ayam cincang dengan kecap. Panaskan bakso dalam kaldu.",
        },
        MealTemplate {
            meal_type: "dinner",
            title: "🥣 Sup Iga Sapi",
            foods: &["Sup iga sapi", "Nasi hangat", "Sambal kecap", "Emping"],
            ingredients: &["Iga sapi 200g", "Kentang, wortel, tomat", "Seledri, daun bawang", "Nasi 150g"],
            description: "Sup bening bergizi tinggi kolagen",
            calories: "~550 kkal",
            estimated_cost: "Rp 35.000 - 50.000",
            recipe: "Rebus iga hingga empuk 2 jam. Tambahkan sayuran, sajikan dengan sambal kecap.",
        },
        MealTemplate {
            meal_type: "dinner",
            title: "🍛 Nasi Goreng Kampung",
            foods: &["Nasi goreng kampung", "Telur mata sapi", "Kerupuk", "Acar"],
            ingredients: &["Nasi 200g", "Telur 2 butir", "Cabai rawit", "Bawang merah, putih", "Kecap manis"],
            description: "Nasi goreng pedas dengan bumbu sederhana",
            calories: "~520 kkal",
            estimated_cost: "Rp 12.000 - 18.000",
            recipe: "Tumis bumbu, masukkan nasi dan cabai. Goreng telur mata sapi di atasnya.",
        },
        MealTemplate {
            meal_type: "dinner",
            title: "🥗 Salad Ayam Mediterranean",
            foods: &["Salad sayuran", "Dada ayam panggang", "Kentang wedges"],
            ingredients: &["Selada, tomat, mentimun", "Dada ayam 150g", "Kentang 100g", "Minyak zaitun, lemon"],
            description: "Makan malam ringan ala barat",
            calories: "~400 kkal",
            estimated_cost: "Rp 25.000 - 35.000",
            recipe: "Panggang ayam dengan herbs. Buat salad dengan dressing olive oil lemon.",
        },
        MealTemplate {
            meal_type: "dinner",
            title: "🦐 Capcay Seafood",
            foods: &["Capcay seafood", "Nasi putih", "Acar kuning"],
            ingredients: &["Udang 50g", "Bakso ikan 50g", "Sayuran campur 150g", "Saus tiram", "Nasi 150g"],
            description: "Tumis sayuran Chinese-Indonesian style",
            calories: "~450 kkal",
            estimated_cost: "Rp 22.000 - 32.000",
            recipe: "Tumis seafood dengan sayuran, tambahkan saus tiram. Sajikan dengan nasi.",
        },
    ],
};

/// At most one applies; Normal keeps the default day.
pub static BMI_OVERRIDES: &[MenuOverride] = &[
    MenuOverride {
        name: "underweight",
        trigger: Trigger::BmiCategoryIn(&[BmiCategory::Underweight]),
        patch: MenuPatch {
            health_tip: Some("💪 Fokus menambah asupan kalori sehat. Tambahkan alpukat, kacang-kacangan, dan susu full cream."),
            breakfast: Some(MealEdit::Replace(MealTemplate {
                meal_type: "breakfast",
                title: "🌅 Sarapan Tinggi Kalori",
                foods: &["Nasi goreng telur", "Susu full cream", "Pisang"],
                ingredients: &["Nasi 200g", "Telur 2 butir", "Minyak 2 sdm", "Bawang putih 2 siung", "Kecap manis", "Susu full cream 250ml", "Pisang 1 buah"],
                description: "Sarapan padat kalori untuk menambah berat badan sehat",
                calories: "~600 kkal",
                estimated_cost: "Rp 12.000 - 18.000",
                recipe: "1. Tumis bawang putih hingga harum. 2. Masukkan nasi, aduk rata. 3. Buat lubang, masukkan telur, orak-arik. 4. Tambahkan kecap manis, aduk rata. 5. Sajikan dengan susu dan pisang.",
            })),
            lunch: Some(MealEdit::Replace(MealTemplate {
                meal_type: "lunch",
                title: "🍱 Makan Siang Berenergi",
                foods: &["Nasi putih porsi besar", "Ayam goreng", "Tempe goreng", "Sayur santan"],
                ingredients: &["Nasi 250g", "Ayam 1 potong paha", "Tempe 100g", "Sayur nangka muda", "Santan 100ml", "Bumbu lengkap"],
                description: "Makan siang tinggi karbohidrat dan protein",
                calories: "~750 kkal",
                estimated_cost: "Rp 20.000 - 30.000",
                recipe: "1. Goreng ayam dengan bumbu kuning. 2. Goreng tempe tipis-tipis. 3. Masak sayur nangka dengan santan. 4. Sajikan dengan nasi hangat porsi besar.",
            })),
            dinner: Some(MealEdit::Replace(MealTemplate {
                meal_type: "dinner",
                title: "🌙 Makan Malam Bergizi",
                foods: &["Nasi tim ayam", "Sup daging", "Alpukat jus"],
                ingredients: &["Beras 150g", "Ayam cincang 100g", "Daging sapi 100g", "Wortel, kentang", "Alpukat 1 buah", "Susu kental manis"],
                description: "Makan malam mudah dicerna tapi tinggi kalori",
                calories: "~650 kkal",
                estimated_cost: "Rp 35.000 - 45.000",
                recipe: "1. Masak nasi tim dengan ayam cincang dan kaldu. 2. Rebus daging dengan sayuran untuk sup. 3. Blender alpukat dengan susu kental manis.",
            })),
            snacks: Some(&[
                MealTemplate {
                    meal_type: "snack",
                    title: "🥜 Snack Pagi",
                    foods: &["Roti selai kacang", "Susu cokelat"],
                    ingredients: &["Roti 2 lembar", "Selai kacang 2 sdm", "Susu cokelat 200ml"],
                    calories: "~350 kkal",
                    estimated_cost: "Rp 10.000 - 15.000",
                    recipe: "Oleskan selai kacang pada roti, sajikan dengan susu cokelat.",
                    ..MealTemplate::BLANK
                },
                MealTemplate {
                    meal_type: "snack",
                    title: "🍌 Snack Sore",
                    foods: &["Pisang goreng", "Teh manis"],
                    ingredients: &["Pisang 2 buah", "Tepung 50g", "Minyak goreng"],
                    calories: "~300 kkal",
                    estimated_cost: "Rp 8.000 - 12.000",
                    recipe: "Balut pisang dengan tepung, goreng hingga kecokelatan.",
                    ..MealTemplate::BLANK
                },
            ]),
            total_calories: Some("~2650 kkal"),
            total_estimated_cost: Some("Rp 85.000 - 120.000"),
            ..MenuPatch::EMPTY
        },
    },
    MenuOverride {
        name: "overweight",
        trigger: Trigger::BmiCategoryIn(&[BmiCategory::Overweight, BmiCategory::Obese]),
        patch: MenuPatch {
            health_tip: Some("🥗 Fokus pada makanan rendah kalori tapi mengenyangkan. Perbanyak sayuran dan protein tanpa lemak."),
            breakfast: Some(MealEdit::Replace(MealTemplate {
                meal_type: "breakfast",
                title: "🌅 Sarapan Rendah Kalori",
                foods: &["Telur rebus", "Salad sayur", "Teh hijau"],
                ingredients: &["Telur 2 butir", "Selada 1 mangkuk", "Tomat 1 buah", "Mentimun 1/2 buah", "Perasan lemon", "Teh hijau 1 kantong"],
                description: "Sarapan tinggi protein rendah karbohidrat",
                calories: "~200 kkal",
                estimated_cost: "Rp 10.000 - 15.000",
                recipe: "1. Rebus telur 10 menit. 2. Potong sayuran untuk salad. 3. Siram dengan perasan lemon. 4. Seduh teh hijau tanpa gula.",
            })),
            lunch: Some(MealEdit::Replace(MealTemplate {
                meal_type: "lunch",
                title: "🍱 Makan Siang Diet",
                foods: &["Salad sayuran besar", "Dada ayam panggang", "Sup sayur tanpa santan"],
                ingredients: &["Dada ayam 150g", "Sayuran campur 200g", "Wortel, brokoli, bayam", "Minyak zaitun 1 sdt", "Lemon, garam, lada"],
                description: "Rendah karbohidrat, tinggi protein dan serat",
                calories: "~350 kkal",
                estimated_cost: "Rp 20.000 - 28.000",
                recipe: "1. Panggang dada ayam tanpa kulit. 2. Rebus sayuran untuk sup tanpa santan. 3. Buat salad dengan dressing minyak zaitun + lemon.",
            })),
            dinner: Some(MealEdit::Replace(MealTemplate {
                meal_type: "dinner",
                title: "🌙 Makan Malam Super Ringan",
                foods: &["Sup sayuran", "Tahu kukus", "Sayuran kukus"],
                ingredients: &["Tahu 150g", "Wortel, brokoli, kembang kol 150g", "Bawang putih", "Garam & lada secukupnya"],
                description: "Makan malam sangat ringan untuk tidur nyenyak",
                calories: "~200 kkal",
                estimated_cost: "Rp 12.000 - 18.000",
                recipe: "1. Kukus tahu 10 menit. 2. Kukus sayuran sampai empuk. 3. Sajikan dengan sedikit kecap asin rendah garam.",
            })),
            snacks: Some(&[
                MealTemplate {
                    meal_type: "snack",
                    title: "🥒 Snack Pagi",
                    foods: &["Mentimun", "Wortel"],
                    ingredients: &["Mentimun 1 buah", "Wortel 1 buah"],
                    calories: "~50 kkal",
                    estimated_cost: "Rp 3.000 - 5.000",
                    description: "Sayuran segar tanpa saus",
                    recipe: "Cuci dan potong, makan langsung.",
                },
                MealTemplate {
                    meal_type: "snack",
                    title: "🍎 Snack Sore",
                    foods: &["Apel", "Air putih"],
                    ingredients: &["Apel 1 buah"],
                    calories: "~80 kkal",
                    estimated_cost: "Rp 5.000 - 8.000",
                    description: "Buah rendah kalori",
                    recipe: "Cuci apel, makan dengan kulitnya untuk serat maksimal.",
                },
            ]),
            total_calories: Some("~880 kkal"),
            total_estimated_cost: Some("Rp 50.000 - 74.000"),
            ..MenuPatch::EMPTY
        },
    },
];

/// Applied in this order; a later match overwrites fields an earlier one set.
pub static SYMPTOM_OVERRIDES: &[MenuOverride] = &[
    MenuOverride {
        name: "diabetes",
        trigger: Trigger::SymptomPresentAnyOf(&[S::Diabetes, S::HighBloodSugar]),
        patch: MenuPatch {
            health_tip: Some("🩸 Pilih makanan dengan indeks glikemik rendah. Hindari gula dan makanan olahan."),
            breakfast: Some(MealEdit::Replace(MealTemplate {
                meal_type: "breakfast",
                title: "🌅 Sarapan Diabetes-Friendly",
                foods: &["Oatmeal tanpa gula", "Telur dadar sayuran", "Alpukat"],
                ingredients: &["Oatmeal 4 sdm", "Telur 2 butir", "Bayam 50g", "Alpukat 1/2 buah", "Susu almond tanpa gula 100ml"],
                description: "Sarapan rendah gula, tinggi serat dan protein",
                calories: "~350 kkal",
                recipe: "1. Masak oatmeal dengan air/susu almond tanpa gula. 2. Dadar telur dengan bayam cincang. 3. Iris alpukat sebagai pendamping.",
                ..MealTemplate::BLANK
            })),
            lunch: Some(MealEdit::Replace(MealTemplate {
                meal_type: "lunch",
                title: "🍱 Makan Siang Gula Darah Stabil",
                foods: &["Nasi merah porsi kecil", "Ikan panggang", "Tumis sayuran", "Tahu kukus"],
                ingredients: &["Nasi merah 100g", "Ikan kakap 150g", "Brokoli, wortel 100g", "Tahu 100g", "Bawang putih, jahe"],
                description: "Rendah karbohidrat dengan protein tinggi",
                calories: "~400 kkal",
                recipe: "1. Panggang ikan dengan bumbu jahe. 2. Tumis sayuran dengan sedikit minyak. 3. Kukus tahu sajikan dengan kecap rendah gula.",
                ..MealTemplate::BLANK
            })),
            dinner: Some(MealEdit::Replace(MealTemplate {
                meal_type: "dinner",
                title: "🌙 Makan Malam Ringan Diabetesi",
                foods: &["Salad sayuran", "Dada ayam panggang", "Sup sayur bening"],
                ingredients: &["Selada, tomat, mentimun", "Dada ayam 100g", "Wortel, kentang 50g", "Minyak zaitun 1 sdt"],
                description: "Makan malam yang tidak menaikkan gula darah",
                calories: "~300 kkal",
                recipe: "1. Panggang dada ayam tanpa kulit. 2. Buat salad dengan dressing minyak zaitun. 3. Rebus sup sayur tanpa gula.",
                ..MealTemplate::BLANK
            })),
            snacks: Some(&[
                MealTemplate {
                    meal_type: "snack",
                    title: "🥒 Snack Pagi",
                    foods: &["Mentimun", "Kacang almond 10 butir"],
                    ingredients: &["Mentimun 1 buah", "Almond 15g"],
                    calories: "~100 kkal",
                    recipe: "Cuci mentimun, potong-potong, sajikan dengan almond.",
                    ..MealTemplate::BLANK
                },
                MealTemplate {
                    meal_type: "snack",
                    title: "🍐 Snack Sore",
                    foods: &["Pir", "Keju rendah lemak"],
                    ingredients: &["Pir 1 buah", "Keju slice 1 lembar"],
                    calories: "~120 kkal",
                    recipe: "Iris pir, sajikan dengan keju. Pir memiliki IG rendah.",
                    ..MealTemplate::BLANK
                },
            ]),
            drinks: Some(&["☕ Air putih 8-10 gelas/hari", "🍵 Teh hijau tanpa gula", "☕ Kopi hitam tanpa gula (maks 2 cangkir)", "🥛 Susu almond tanpa gula", "🍋 Air lemon hangat", "🥒 Infused water mentimun"]),
            fruits: Some(&["🍐 Pir - IG rendah", "🍎 Apel hijau - serat tinggi", "🫐 Blueberry - antioksidan", "🍓 Stroberi - IG rendah", "🥑 Alpukat - lemak sehat", "🍒 Ceri - antiinflamasi"]),
            avoid_drinks: Some(&["🚫 Jus kemasan dengan gula", "🚫 Minuman bersoda", "🚫 Teh manis", "🚫 Kopi dengan gula/krimer", "🚫 Susu full cream", "🚫 Smoothie dengan es krim"]),
            avoid_fruits: Some(&["🚫 Semangka - IG tinggi", "🚫 Nanas matang", "🚫 Mangga matang berlebihan", "🚫 Durian", "🚫 Buah kalengan sirup", "🚫 Kurma berlebihan"]),
            total_calories: Some("~1270 kkal"),
            ..MenuPatch::EMPTY
        },
    },
    MenuOverride {
        name: "indigestion",
        trigger: Trigger::SymptomPresentAnyOf(&[S::Gastritis, S::Indigestion]),
        patch: MenuPatch {
            health_tip: Some("🍵 Makan dalam porsi kecil tapi sering (5-6x sehari). Hindari makanan pedas, asam, dan berminyak."),
            breakfast: Some(MealEdit::Replace(MealTemplate {
                meal_type: "breakfast",
                title: "🌅 Sarapan Ramah Lambung",
                foods: &["Bubur ayam lembut", "Pisang matang", "Teh hangat tawar"],
                ingredients: &["Beras 50g", "Ayam suwir 50g", "Daun bawang", "Pisang 1 buah", "Air 500ml"],
                description: "Sarapan lembut mudah dicerna untuk lambung sensitif",
                calories: "~300 kkal",
                recipe: "1. Masak bubur dari beras dengan air hingga lembut. 2. Tambahkan ayam suwir dan daun bawang. 3. Sajikan dengan pisang matang.",
                ..MealTemplate::BLANK
            })),
            lunch: Some(MealEdit::Replace(MealTemplate {
                meal_type: "lunch",
                title: "🍱 Makan Siang Anti Maag",
                foods: &["Nasi putih lembek", "Ayam rebus", "Sayur bening bayam", "Tahu kukus"],
                ingredients: &["Nasi 150g", "Ayam 100g", "Bayam 50g", "Tahu 100g", "Air kaldu"],
                description: "Makanan rebus dan kukus yang tidak merangsang lambung",
                calories: "~400 kkal",
                recipe: "1. Rebus ayam hingga empuk tanpa bumbu pedas. 2. Buat sayur bening dari bayam. 3. Kukus tahu, sajikan dengan nasi lembek.",
                ..MealTemplate::BLANK
            })),
            dinner: Some(MealEdit::Replace(MealTemplate {
                meal_type: "dinner",
                title: "🌙 Makan Malam Gentle",
                foods: &["Sup kentang wortel", "Roti tawar", "Pisang"],
                ingredients: &["Kentang 100g", "Wortel 50g", "Roti tawar 2 lembar", "Pisang 1 buah"],
                description: "Makan malam ringan 3 jam sebelum tidur",
                calories: "~300 kkal",
                recipe: "1. Rebus kentang dan wortel hingga lembut. 2. Haluskan sedikit untuk tekstur soup. 3. Sajikan dengan roti dan pisang.",
                ..MealTemplate::BLANK
            })),
            snacks: Some(&[
                MealTemplate {
                    meal_type: "snack",
                    title: "🍌 Snack Pagi (10:00)",
                    foods: &["Pisang", "Biskuit tawar"],
                    ingredients: &["Pisang 1 buah", "Biskuit 2 keping"],
                    calories: "~150 kkal",
                    recipe: "Makan biskuit dengan pisang untuk menetralkan asam lambung.",
                    ..MealTemplate::BLANK
                },
                MealTemplate {
                    meal_type: "snack",
                    title: "🥛 Snack Sore (15:00)",
                    foods: &["Susu hangat", "Roti panggang"],
                    ingredients: &["Susu rendah lemak 200ml", "Roti 1 lembar"],
                    calories: "~180 kkal",
                    recipe: "Hangatkan susu, panggang roti tanpa mentega.",
                    ..MealTemplate::BLANK
                },
            ]),
            drinks: Some(&["🥛 Susu hangat", "🍵 Teh chamomile", "☕ Air putih hangat", "🥥 Air kelapa muda", "🍯 Air madu hangat (pagi)", "🥒 Jus lidah buaya"]),
            fruits: Some(&["🍌 Pisang matang - menetralkan asam", "🍐 Pir - serat lembut", "🍎 Apel tanpa kulit - mudah dicerna", "🍈 Melon - menenangkan lambung", "🥭 Pepaya - enzim pencernaan", "🥑 Alpukat - melindungi lambung"]),
            avoid_drinks: Some(&["🚫 Kopi", "🚫 Teh terlalu pekat", "🚫 Minuman bersoda", "🚫 Alkohol", "🚫 Jus jeruk/asam", "🚫 Minuman terlalu dingin"]),
            avoid_fruits: Some(&["🚫 Jeruk - terlalu asam", "🚫 Lemon langsung", "🚫 Nanas - tinggi asam", "🚫 Tomat mentah", "🚫 Mangga muda"]),
            total_calories: Some("~1330 kkal"),
            ..MenuPatch::EMPTY
        },
    },
    MenuOverride {
        name: "hypertension",
        trigger: Trigger::SymptomPresentAnyOf(&[S::HighBloodPressure, S::Hypertension]),
        patch: MenuPatch {
            health_tip: Some("❤️ Kurangi garam! Maksimal 1 sendok teh per hari. Perbanyak kalium dari pisang."),
            breakfast: Some(MealEdit::Dishes {
                foods: &["Oatmeal", "Pisang", "Yogurt rendah lemak"],
                recipe: "Masak oatmeal tanpa garam, tambahkan pisang iris dan yogurt.",
            }),
            lunch: Some(MealEdit::Dishes {
                foods: &["Nasi merah", "Ikan kukus lemon", "Sayur bayam", "Jus bit"],
                recipe: "Kukus ikan dengan perasan lemon, rebus bayam tanpa garam. Blender bit dengan air.",
            }),
            dinner: Some(MealEdit::Dishes {
                foods: &["Salad sayuran tanpa garam", "Tahu panggang", "Kentang rebus"],
                recipe: "Panggang tahu dengan bumbu herbal tanpa garam. Dressing salad: minyak zaitun + lemon.",
            }),
            drinks: Some(&["☕ Air putih 10+ gelas/hari", "🥥 Air kelapa - tinggi kalium", "🍵 Teh hibiscus - menurunkan TD", "🥤 Jus bit - vasodilator alami", "🍶 Susu skim", "🫖 Teh hijau tanpa gula"]),
            fruits: Some(&["🍌 Pisang - tinggi kalium", "🍊 Jeruk - kalium+vitamin C", "🫐 Blueberry - antioksidan", "🥝 Kiwi - menurunkan TD", "🍉 Semangka - citrulline", "🍇 Anggur merah"]),
            avoid_drinks: Some(&["🚫 Kopi >2 cangkir", "🚫 Alkohol", "🚫 Minuman energi", "🚫 Minuman bersoda", "🚫 Teh manis"]),
            avoid_fruits: Some(&["🚫 Buah kalengan tinggi natrium", "🚫 Acar buah"]),
            ..MenuPatch::EMPTY
        },
    },
    MenuOverride {
        name: "cholesterol",
        trigger: Trigger::SymptomPresentAnyOf(&[S::HighCholesterol, S::Cholesterol]),
        patch: MenuPatch {
            health_tip: Some("Hindari lemak jenuh dan trans. Perbanyak serat larut dan omega-3."),
            breakfast: Some(MealEdit::Dishes {
                foods: &["Oatmeal dengan chia seed", "Apel", "Teh hijau"],
                recipe: "Masak oatmeal, tambahkan 1 sdm chia seed dan apel potong.",
            }),
            lunch: Some(MealEdit::Dishes {
                foods: &["Nasi merah", "Salmon panggang", "Tumis brokoli", "Sup kacang merah"],
                recipe: "Panggang salmon dengan minyak zaitun. Tumis brokoli dengan bawang putih tanpa minyak berlebihan.",
            }),
            dinner: Some(MealEdit::Dishes {
                foods: &["Salad alpukat", "Dada ayam panggang tanpa kulit", "Sayuran kukus"],
                recipe: "Buang kulit ayam, panggang dengan herbs. Sajikan dengan salad alpukat.",
            }),
            snacks: Some(&[MealTemplate {
                meal_type: "snack",
                title: "🥜 Snack Sehat",
                foods: &["Kacang walnut 10 butir", "Apel"],
                calories: "~150 kkal",
                description: "Omega-3 untuk menurunkan kolesterol",
                ..MealTemplate::BLANK
            }]),
            total_calories: Some("~1400 kkal"),
            ..MenuPatch::EMPTY
        },
    },
    MenuOverride {
        name: "anemia",
        trigger: Trigger::SymptomPresentAnyOf(&[S::Anemia, S::LowBlood, S::Pallor]),
        patch: MenuPatch {
            health_tip: Some("Konsumsi makanan tinggi zat besi + vitamin C. Hindari teh/kopi saat makan utama."),
            breakfast: Some(MealEdit::Dishes {
                foods: &["Telur dadar bayam", "Roti gandum", "Jus jeruk"],
                recipe: "Dadar telur dengan bayam cincang. Minum jus jeruk untuk bantu penyerapan zat besi.",
            }),
            lunch: Some(MealEdit::Dishes {
                foods: &["Nasi merah", "Daging sapi tumis paprika", "Brokoli", "Sup kacang merah"],
                recipe: "Tumis daging sapi dengan paprika merah (vitamin C). Rebus kacang merah untuk sup.",
            }),
            dinner: Some(MealEdit::Dishes {
                foods: &["Hati ayam goreng sedikit minyak", "Tempe bacem", "Tumis kangkung", "Nasi"],
                recipe: "Goreng hati dengan sedikit minyak. Bacem tempe dengan bumbu manis.",
            }),
            snacks: Some(&[MealTemplate {
                meal_type: "snack",
                title: "🍫 Snack Zat Besi",
                foods: &["Kurma 5 buah", "Kismis"],
                calories: "~120 kkal",
                description: "Tinggi zat besi alami",
                ..MealTemplate::BLANK
            }]),
            ..MenuPatch::EMPTY
        },
    },
    MenuOverride {
        name: "gout",
        trigger: Trigger::SymptomPresentAnyOf(&[S::UricAcid, S::Gout]),
        patch: MenuPatch {
            health_tip: Some("Hindari makanan tinggi purin. Minum air putih minimal 10 gelas sehari."),
            breakfast: Some(MealEdit::Dishes {
                foods: &["Nasi dengan telur mata sapi", "Sayur bening labu", "Teh herbal"],
                recipe: "Goreng telur dengan sedikit minyak. Buat sayur bening dari labu siam.",
            }),
            lunch: Some(MealEdit::Dishes {
                foods: &["Nasi", "Tahu bacem", "Tempe goreng", "Sayur lodeh tanpa kacang"],
                recipe: "Bacem tahu dengan bumbu manis. Lodeh dari labu dan wortel tanpa kacang.",
            }),
            dinner: Some(MealEdit::Dishes {
                foods: &["Sup sayuran (wortel, kentang, labu)", "Telur rebus", "Nasi sedikit"],
                recipe: "Rebus sayuran dengan kaldu non-daging. Tambahkan telur rebus.",
            }),
            snacks: Some(&[MealTemplate {
                meal_type: "snack",
                title: "🍒 Snack Anti Asam Urat",
                foods: &["Buah ceri", "Air putih"],
                calories: "~80 kkal",
                description: "Ceri membantu menurunkan asam urat",
                ..MealTemplate::BLANK
            }]),
            ..MenuPatch::EMPTY
        },
    },
    MenuOverride {
        name: "stress",
        trigger: Trigger::SymptomPresentAnyOf(&[S::Stress, S::Anxious, S::Anxiety]),
        patch: MenuPatch {
            health_tip: Some("Makanan kaya magnesium dan omega-3 membantu menenangkan pikiran."),
            breakfast: Some(MealEdit::Dishes {
                foods: &["Oatmeal dengan pisang", "Teh chamomile", "Almond"],
                recipe: "Masak oatmeal, tambahkan pisang. Seduh teh chamomile hangat.",
            }),
            lunch: Some(MealEdit::Dishes {
                foods: &["Nasi merah", "Salmon panggang", "Salad bayam alpukat", "Air lemon"],
                recipe: "Panggang salmon. Campurkan bayam segar dengan irisan alpukat.",
            }),
            dinner: Some(MealEdit::Dishes {
                foods: &["Sup ayam hangat", "Kentang tumbuk", "Sayuran kukus", "Teh herbal"],
                recipe: "Buat sup ayam dengan wortel dan seledri. Tumbuk kentang dengan sedikit susu.",
            }),
            snacks: Some(&[MealTemplate {
                meal_type: "snack",
                title: "🍫 Snack Mood Booster",
                foods: &["Cokelat hitam 2 kotak", "Kacang almond"],
                calories: "~100 kkal",
                description: "Cokelat hitam meningkatkan serotonin",
                ..MealTemplate::BLANK
            }]),
            ..MenuPatch::EMPTY
        },
    },
    MenuOverride {
        name: "insomnia",
        trigger: Trigger::SymptomPresentAnyOf(&[S::SleepDisturbance, S::Insomnia, S::TroubleSleeping]),
        patch: MenuPatch {
            health_tip: Some("Hindari kafein setelah jam 2 siang. Makan malam ringan 3 jam sebelum tidur."),
            breakfast: Some(MealEdit::Dishes {
                foods: &["Roti gandum", "Telur rebus", "Pisang", "Susu hangat"],
                recipe: "Sarapan yang mengenyangkan untuk energi stabil sepanjang hari.",
            }),
            lunch: Some(MealEdit::Dishes {
                foods: &["Nasi merah", "Ikan panggang", "Tumis sayuran", "Sup"],
                recipe: "Makan siang normal, hindari kafein setelah makan siang.",
            }),
            dinner: Some(MealEdit::Dishes {
                foods: &["Oatmeal ringan", "Kiwi 2 buah", "Madu", "Susu hangat"],
                recipe: "Makan malam ringan. Kiwi mengandung serotonin. Susu hangat dengan madu.",
            }),
            snacks: Some(&[MealTemplate {
                meal_type: "snack",
                title: "🥛 Snack Sebelum Tidur",
                foods: &["Susu hangat", "Madu 1 sdt"],
                calories: "~100 kkal",
                description: "2 jam sebelum tidur untuk kualitas tidur",
                ..MealTemplate::BLANK
            }]),
            total_calories: Some("~1400 kkal"),
            ..MenuPatch::EMPTY
        },
    },
    MenuOverride {
        name: "fever",
        trigger: Trigger::SymptomPresentAnyOf(&[S::Fever, S::Flu, S::Cold]),
        patch: MenuPatch {
            health_tip: Some("Perbanyak cairan hangat dan istirahat. Vitamin C untuk daya tahan tubuh."),
            breakfast: Some(MealEdit::Dishes {
                foods: &["Bubur ayam hangat", "Teh jahe madu", "Jeruk"],
                recipe: "Bubur dengan ayam suwir dan bawang goreng. Seduh jahe dengan madu.",
            }),
            lunch: Some(MealEdit::Dishes {
                foods: &["Sup ayam hangat", "Nasi lembek", "Sayur bening"],
                recipe: "Sup ayam dengan banyak kaldu. Nasi yang agak lembek mudah dicerna.",
            }),
            dinner: Some(MealEdit::Dishes {
                foods: &["Bubur", "Telur rebus", "Air jahe hangat"],
                recipe: "Makan ringan saat malam. Perbanyak minum air hangat.",
            }),
            total_calories: Some("~1200 kkal"),
            ..MenuPatch::EMPTY
        },
    },
];
