use crate::error::CatalogError;
use mfx_domain::catalog::EquipmentCategory;
use tracing::debug;

static EQUIPMENT: [EquipmentCategory; 7] = [
    EquipmentCategory {
        id: "sparkular",
        label: "Sparkular",
        title: "Sparkular (Faísca Fria)",
        description: "Efeito de pirotecnia indoor totalmente seguro. Não queima, não gera fumaça e é perfeito para proximidade. Ideal para casamentos, entradas triunfais e palcos menores onde a segurança é prioridade.",
        specs: &["Altura: Ajustável 1m a 5m", "Uso: Indoor e Outdoor", "Segurança: Não queima a pele"],
        image: "/images/equipamentos/equipamento-1-sparkular.png",
    },
    EquipmentCategory {
        id: "flame",
        label: "Flame Machines",
        title: "Flame Machines",
        description: "Jatos de fogo reais controlados via DMX. Altura e duração ajustáveis para momentos de clímax. O calor e o visual impactante que todo grande show merece.",
        specs: &["Chama Real", "Controle DMX 512", "Sistemas de Segurança Anti-Tombamento"],
        image: "/images/equipamentos/equipamento-2-flame.png",
    },
    EquipmentCategory {
        id: "co2",
        label: "Jatos CO²",
        title: "Jatos de CO² & Fumaça",
        description: "Colunas de fumaça criogênica de desaparecimento rápido. O efeito refrescante e visualmente explosivo, perfeito para drops de música eletrônica e revelações.",
        specs: &["Efeito Criogênico (Gelado)", "Desaparecimento Instantâneo"],
        image: "/images/equipamentos/equipamento-3-co2.jpg",
    },
    EquipmentCategory {
        id: "smoke-bubble",
        label: "Smoke Bubble",
        title: "Smoke Bubble",
        description: "Bolhas de sabão recheadas com fumaça. Ao estourarem, liberam uma névoa mágica. Um efeito lúdico, inovador e surpreendente para momentos especiais.",
        specs: &["Bolhas com Fumaça", "Alto rendimento de bolhas"],
        image: "/images/equipamentos/equipamento-4-bubble.png",
    },
    EquipmentCategory {
        id: "stadium-shot",
        label: "Stadium Shot",
        title: "Stadium Shot",
        description: "Disparos massivos de papel picado (confete) ou serpentinas. Cubra a multidão com cores e alegria em segundos. O grand finale perfeito para grandes festivais.",
        specs: &["Alcance: Até 20 metros", "Consumível: Papel ou Serpentina", "Acionamento elétrico imediato"],
        image: "/images/equipamentos/equipamento-5-shot.png",
    },
    EquipmentCategory {
        id: "laser",
        label: "Laser Holográfico",
        title: "Laser Holográfico",
        description: "Projeções laser de alta definição, criando túneis, formas geométricas 3D e 'céus estrelados'. Tecnologia que transforma a atmosfera do ambiente.",
        specs: &["Cores RGB Full Color", "Formas Geométricas e Volumétricas", "Sincronia total com a música"],
        image: "/images/equipamentos/equipamento-6-laser.jpg",
    },
    EquipmentCategory {
        id: "low-fog",
        label: "Gelo Seco",
        title: "Máquina de Gelo Seco (Low Fog)",
        description: "Efeito clássico de 'nuvens no chão'. A fumaça densa permanece baixa, criando um visual etéreo e romântico, ideal para valsas e performances artísticas.",
        specs: &["Efeito Nuvem (Fumaça Baixa)", "À base de água ou gelo seco", "Não deixa resíduos ou cheiro"],
        image: "/images/equipamentos/equipamento-7-lowfog.jpg",
    },
];

/// All equipment categories, in tab order.
#[must_use]
pub fn equipment() -> &'static [EquipmentCategory] {
    &EQUIPMENT
}

/// Looks up a category by its id.
#[must_use]
pub fn find(id: &str) -> Option<&'static EquipmentCategory> {
    EQUIPMENT.iter().find(|category| category.id == id)
}

/// Selection state of the tabbed equipment display.
///
/// Holds only the active id; the displayed record is always read back from the static table,
/// so switching tabs can never alter catalog data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquipmentTabs {
    active: &'static EquipmentCategory,
}

impl Default for EquipmentTabs {
    fn default() -> Self {
        Self { active: &EQUIPMENT[0] }
    }
}

impl EquipmentTabs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches the active tab.
    ///
    /// # Errors
    /// Returns [`CatalogError::UnknownCategory`] if `id` is not in the catalog; the current
    /// selection is kept.
    pub fn select(&mut self, id: &str) -> Result<&'static EquipmentCategory, CatalogError> {
        let category = find(id).ok_or_else(|| CatalogError::UnknownCategory { id: id.to_owned() })?;
        debug!(from = self.active.id, to = category.id, "Equipment tab selected");
        self.active = category;
        Ok(category)
    }

    #[must_use]
    pub const fn active(&self) -> &'static EquipmentCategory {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active.id == id
    }
}
