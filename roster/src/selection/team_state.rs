use std::collections::BTreeSet;

use roster_data::{
    Id,
    SpeciesData,
    Type,
    TypeChart,
    TypeEffectiveness,
};

/// Members already placed on a team, as seen by selection.
#[derive(Debug, Default, Clone)]
pub struct TeamState {
    species: BTreeSet<Id>,
    primary_types: BTreeSet<Type>,
    threatened: BTreeSet<Type>,
}

impl TeamState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a placed member by the species it was drawn as and the species it resolved to.
    pub fn add(&mut self, original: &Id, resolved: &SpeciesData, chart: &TypeChart) {
        self.species.insert(original.clone());
        self.species.insert(resolved.id());
        self.primary_types.insert(resolved.primary_type);
        self.threatened.extend(threatened_types(resolved, chart));
    }

    /// Is the species already on the team, in either its drawn or resolved form?
    pub fn contains(&self, species: &Id) -> bool {
        self.species.contains(species)
    }

    pub fn species(&self) -> impl Iterator<Item = &Id> {
        self.species.iter()
    }

    pub fn has_primary_type(&self, typ: Type) -> bool {
        self.primary_types.contains(&typ)
    }

    /// Does the species threaten a type no member threatens yet?
    pub fn fills_coverage_gap(&self, species: &SpeciesData, chart: &TypeChart) -> bool {
        threatened_types(species, chart).any(|typ| !self.threatened.contains(&typ))
    }
}

/// Types hit super effectively by an attack of the given type.
pub(crate) fn threatened_by(attacking: Type, chart: &TypeChart) -> impl Iterator<Item = Type> + '_ {
    Type::CANONICAL
        .into_iter()
        .filter(move |defending| chart.effectiveness(attacking, *defending) == TypeEffectiveness::Strong)
}

/// Types hit super effectively by a same-type attack of the species.
fn threatened_types<'a>(
    species: &SpeciesData,
    chart: &'a TypeChart,
) -> impl Iterator<Item = Type> + 'a {
    let attacking = species.types();
    Type::CANONICAL.into_iter().filter(move |defending| {
        attacking
            .iter()
            .any(|typ| chart.effectiveness(*typ, *defending) == TypeEffectiveness::Strong)
    })
}
