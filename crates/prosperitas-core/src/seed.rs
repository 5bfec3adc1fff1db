//! Default curriculum shipped with the tracker.

use crate::models::{Catalog, Lesson, Module, ModuleCategory};

fn lesson(
    id: &str,
    title: &str,
    description: &str,
    category: ModuleCategory,
    estimated_minutes: u32,
) -> Lesson {
    Lesson {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category,
        estimated_minutes,
        is_unlocked: false,
        is_completed: false,
    }
}

fn module(
    id: &str,
    title: &str,
    description: &str,
    category: ModuleCategory,
    level: u32,
    lessons: &[(&str, &str, &str, u32)],
) -> Module {
    Module {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category,
        level,
        lessons: lessons
            .iter()
            .map(|(lid, title, desc, minutes)| lesson(lid, title, desc, category, *minutes))
            .collect(),
    }
}

/// The six seed modules with their starting unlock flags.
///
/// The first lesson of the first two modules starts unlocked; everything
/// else starts locked and incomplete.
pub fn default_modules() -> Vec<Module> {
    use ModuleCategory::*;

    let mut modules = vec![
        module(
            "m1",
            "O Despertar da Riqueza",
            "Fundamentos da psicologia do dinheiro e mentalidade milionária.",
            Mindset,
            1,
            &[
                ("m1-l1", "Psicologia do Investidor", "Como o cérebro sabota sua riqueza.", 15),
                ("m1-l2", "Hábitos de 1%", "A rotina financeira dos multimilionários.", 20),
                ("m1-l3", "Dívidas Boas vs Ruins", "O uso estratégico da alavancagem.", 18),
            ],
        ),
        module(
            "m2",
            "Domínio do Fluxo",
            "Gestão prática de recursos e planejamento de curto a longo prazo.",
            Finance,
            1,
            &[
                ("m2-l1", "Orçamento Inabalável", "Criando um sistema que trabalha por você.", 25),
                ("m2-l2", "Proteção Patrimonial", "Seguros e reservas de emergência.", 15),
            ],
        ),
        module(
            "m3",
            "A Engrenagem do Mundo",
            "Entendendo ciclos, inflação e macroeconomia global.",
            Economy,
            2,
            &[
                ("m3-l1", "Inflação e Deflação", "O inimigo invisível do seu poder de compra.", 30),
                ("m3-l2", "Geopolítica Financeira", "Como o cenário global afeta seu bolso.", 40),
            ],
        ),
        module(
            "m4",
            "Máquina de Juros Compostos",
            "A oitava maravilha do mundo explicada matematicamente.",
            Math,
            2,
            &[
                ("m4-l1", "A Matemática da Liberdade", "Cálculos de independência financeira.", 20),
                ("m4-l2", "O Poder do Tempo", "Simulações de 10 a 40 anos.", 25),
            ],
        ),
        module(
            "m5",
            "O Jogo dos Grandes",
            "Renda variável, Ações, ETFs e análise fundamentalista.",
            Investment,
            3,
            &[
                ("m5-l1", "Introdução à Bolsa", "Como se tornar sócio de grandes empresas.", 45),
                ("m5-l2", "ETFs e Fundos", "Diversificação passiva de alto nível.", 35),
                ("m5-l3", "Gestão de Risco", "Como nunca ser tirado do jogo.", 30),
            ],
        ),
        module(
            "m6",
            "Império Próprio",
            "Empreendedorismo do zero à escala global.",
            Business,
            3,
            &[
                ("m6-l1", "Modelos de Negócios", "Identificando oportunidades lucrativas.", 50),
                ("m6-l2", "Escalabilidade Digital", "Vendendo para o mundo enquanto dorme.", 45),
            ],
        ),
    ];

    for starting in &mut modules[..2] {
        starting.lessons[0].is_unlocked = true;
    }

    modules
}

/// The seed catalog.
///
/// # Panics
///
/// Panics only if the built-in seed data violates the catalog invariants,
/// which the test suite rules out.
pub fn default_catalog() -> Catalog {
    Catalog::new(default_modules()).expect("built-in seed catalog is valid")
}
