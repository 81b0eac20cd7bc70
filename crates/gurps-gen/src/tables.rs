//! Static phrase and lookup tables.
//!
//! Repeated entries are intentional: they weight the uniform pick.

use gurps_mechanics::dice::{DiceExpression, RandomSource, choose};

/// Lowest 3d6 sum.
pub const MIN_SUM: i32 = 3;

/// Character names with gender marks.
pub const NAMES: &[&str] = &[
    "Ренди (М)",
    "Джонатан (М)",
    "Арни (М)",
    "Игри (Ж)",
    "Терра (Ж)",
    "Элин (Ж)",
    "Стур (М)",
    "Жорд (М)",
    "Арни (М)",
    "Арни (Ж)",
    "Дженни (Ж)",
    "Дженнифер (Ж)",
    "Стардар (М)",
    "Арго (М)",
    "Мира (Ж)",
    "Загра (Ж)",
    "Зурмаль (М)",
    "Эрика (Ж)",
];

/// Appearance traits.
pub const APPEARANCE: &[&str] = &[
    "шрам на лице",
    "ожоги на лице",
    "ожоги на руках",
    "татуировка на лице",
    "татуировка на руке (или где-то еще)",
    "редкие волосы",
    "веснушки",
    "очень длинные волосы (коса)",
    "очень длинные волосы (распущенные)",
    "хромает (на левую ногу)",
    "нет руки (DX/2)",
    "нет левого уха",
    "нет пальца",
    "голубые глаза",
    "зеленые глаза",
    "седые волосы",
    "нет глаза",
    "лысый(-ая)",
    "лысый(-ая), татуировка на голове",
    "прячет лицо",
    "нет ноги (DX/2)",
    "горб",
    "идет, будто пишет",
    "темнокожий",
    "альбинос",
    "седой",
    "молодой",
    "пожилой",
    "молодой, но седой",
];

/// Behavior traits.
pub const BEHAVIORS: &[&str] = &[
    "спокойный",
    "угрюмый",
    "разговорчивый",
    "молчаливый",
    "добрый",
    "готов помочь",
    "одиночка",
    "эгоист",
    "законопослушный",
    "суетливый",
    "дерзкий",
    "шутник",
    "застенчивый",
    "скрытный",
    "молчаливый",
    "доверчивый",
];

/// An inventory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item {
    /// Carried as-is.
    Plain(&'static str),
    /// A weapon or shield rendered as `"{name} ({skill}){stats}"`, with the
    /// wielder's skill rolled as `12 + 1d6` when picked.
    Armed {
        /// Weapon name.
        name: &'static str,
        /// Damage or defense text following the skill.
        stats: &'static str,
    },
}

impl Item {
    /// Render the entry, rolling the weapon skill for armed entries.
    pub fn render<S: RandomSource + ?Sized>(&self, source: &mut S) -> String {
        match *self {
            Self::Plain(text) => text.to_string(),
            Self::Armed { name, stats } => {
                let skill = 12 + DiceExpression::ONE_D6.roll(source);
                format!("{name} ({skill}){stats}")
            }
        }
    }
}

/// Inventory items.
pub const ITEMS: &[Item] = &[
    Item::Plain("роба"),
    Item::Plain("роба"),
    Item::Plain("роба"),
    Item::Plain("балахон"),
    Item::Plain("балахон"),
    Item::Plain("латы (PD: 6 // DR: 6)"),
    Item::Plain("полулаты (PD: 4 // DR: 4)"),
    Item::Plain("кольчуга (PD: 3 (1 против кол.) // DR: 4 (2 против кол.))"),
    Item::Plain("кожаный доспех (PD: 2 // DR: 2)"),
    Item::Plain("кожаный доспех (PD: 2 // DR: 2)"),
    Item::Plain("кожаный доспех (PD: 2 // DR: 2)"),
    Item::Plain("легкая одежда (PD: 0 // DR: 0)"),
    Item::Plain("легкая одежда (PD: 0 // DR: 0)"),
    Item::Plain("легкая одежда (PD: 0 // DR: 0)"),
    Item::Plain("плотная одежда (PD: 1 // DR: 1)"),
    Item::Plain("плотная одежда (PD: 1 // DR: 1)"),
    Item::Armed {
        name: "посох",
        stats: " - 1к",
    },
    Item::Armed {
        name: "короткий меч",
        stats: " - 1к+2 руб./ 1к-1 кол.",
    },
    Item::Armed {
        name: "двуручный меч",
        stats: " - 2к руб./ 1к+1 кол.",
    },
    Item::Armed {
        name: "дубина",
        stats: " - 1к+1",
    },
    Item::Armed {
        name: "топор",
        stats: " - 1к+2",
    },
    Item::Armed {
        name: "секира",
        stats: " - 2к+2",
    },
    Item::Armed {
        name: "копье",
        stats: " 1к+2",
    },
    Item::Armed {
        name: "2 ножа",
        stats: " - 1к-1",
    },
    Item::Armed {
        name: "лук",
        stats: " - 1к",
    },
    Item::Armed {
        name: "арбалет",
        stats: " - 1к+2",
    },
    Item::Plain("большой рюкзак"),
    Item::Plain("большой мешок (нагрузка +1)"),
    Item::Plain("2 больших мешка (нагрузка +2)"),
    Item::Armed {
        name: "малый щит",
        stats: " - +2PD",
    },
    Item::Armed {
        name: "большой щит",
        stats: " - +4PD",
    },
];

/// Habits for the "bad habit" disadvantage.
pub const HABITS: &[&str] = &[
    "курит",
    "харкает",
    "жует табак",
    "ковыряет в носу",
    "ковыряет в ухе",
    "отрыгивает",
    "громко пукает",
    "выпивает",
    "что-то жует, ест",
    "матерится",
    "грызет ногти",
    "употребляет наркотики",
];

/// Themed skill-name triples, one per 3d6 sum from 3 to 18.
pub const SKILL_NAMES: [[&str; 3]; 16] = [
    ["Каллиграфия", "Оружейное дело", "Биохимия"],
    ["Ботаника", "Торговое дело", "Ловкость рук"],
    ["Дипломатия", "Врачебное дело", "Спорт (любой)"],
    ["Пение", "Язык (любой)", "Ветеринария"],
    ["Приручение животных", "Бард", "Артистизм"],
    [
        "Тихое передвижение",
        "Собирание (Scrounging)",
        "Первая помощь",
    ],
    [
        "Холодное оружие (любое)",
        "Быстрая подготовка оружия (любого)",
        "Лазание",
    ],
    ["Холодное оружие (любое)", "Ловушки", "Владение щитом"],
    [
        "Бег (перемещение +1)",
        "Драка",
        "Вождение или Верховая езда (любая)",
    ],
    [
        "Оружие дальнего боя",
        "Пилотирование или Тяжелое оружие (любое)",
        "Плавание",
    ],
    ["Пирушки", "Законы", "Хорошие манеры"],
    ["Азартные игры", "Знание улиц", "Политика"],
    [
        "Музыкальный инструмент (любой)",
        "Выживание (любое)",
        "Взлом",
    ],
    ["Подделка", "Маскировка", "Механика"],
    ["Дзюдо или Карате", "Натуралист", "Сексапильность"],
    ["История", "Навигация", "Яды"],
];

/// Skill-name triple for a 3d6 sum. Out-of-range sums snap to the nearest
/// row, so every input maps to an entry.
pub fn skill_names_for(sum: i32) -> &'static [&'static str; 3] {
    let row = (sum - MIN_SUM).clamp(0, SKILL_NAMES.len() as i32 - 1) as usize;
    &SKILL_NAMES[row]
}

/// Pick a phrase uniformly from a non-empty table.
pub fn pick<S: RandomSource + ?Sized>(source: &mut S, table: &[&'static str]) -> &'static str {
    choose(source, table).copied().unwrap_or_default()
}
