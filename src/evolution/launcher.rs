use super::{
    challenge::Challenge,
    options::EvolutionOptions,
    report::{ProgressRecord, ReportSink, ReportTag},
};
use crate::{
    breeding::{BreedStrategy, StashMutation},
    error::{BoatError, OptionExt, Result},
    fitness::{FitnessEvaluator, Review},
    individual::{IdGenerator, Individual},
    pool::ItemPool,
    population::PopulationInitializer,
    rng::RandomNumberGenerator,
    selection::SelectionStrategy,
    validation::validate,
};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Enough generations were accepted and the best boat is light enough.
    Converged,
    /// The configured generation cap was reached first.
    GenerationCap,
}

/// The phases a run moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvolutionState {
    Initializing,
    Evaluating,
    Selecting,
    Recombining,
    Mutating,
    Comparing,
    Accepted,
    Rejected,
    Terminated,
}

/// The outcome of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    /// The best boat of the last accepted evaluation.
    pub best: Individual,
    /// The weakest boat of the last accepted evaluation.
    pub worst: Individual,
    /// Number of accepted generations.
    pub improvements: usize,
    /// Number of generations bred, accepted or not.
    pub generations: usize,
    pub termination: Termination,
}

/// A phase together with the data it works on.
enum Step {
    Initializing,
    Selecting,
    Recombining(Vec<usize>),
    Mutating(Vec<Individual>),
    Evaluating(Vec<Individual>),
    Comparing(Vec<Individual>, Review),
    Accepted(Vec<Individual>, Review),
    Rejected,
    Terminated(Termination),
}

impl Step {
    fn state(&self) -> EvolutionState {
        match self {
            Step::Initializing => EvolutionState::Initializing,
            Step::Selecting => EvolutionState::Selecting,
            Step::Recombining(_) => EvolutionState::Recombining,
            Step::Mutating(_) => EvolutionState::Mutating,
            Step::Evaluating(_) => EvolutionState::Evaluating,
            Step::Comparing(_, _) => EvolutionState::Comparing,
            Step::Accepted(_, _) => EvolutionState::Accepted,
            Step::Rejected => EvolutionState::Rejected,
            Step::Terminated(_) => EvolutionState::Terminated,
        }
    }
}

/// Runs the boat optimization with a breeding strategy, a selection strategy
/// and a challenge.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<B, S, C>
where
    B: BreedStrategy,
    S: SelectionStrategy,
    C: Challenge,
{
    breed_strategy: B,
    selection_strategy: S,
    challenge: C,
    mutation: StashMutation,
}

impl<B, S, C> EvolutionLauncher<B, S, C>
where
    B: BreedStrategy,
    S: SelectionStrategy,
    C: Challenge + Clone + Send + Sync,
{
    pub fn new(breed_strategy: B, selection_strategy: S, challenge: C) -> Self {
        Self {
            breed_strategy,
            selection_strategy,
            challenge,
            mutation: StashMutation::new(),
        }
    }

    pub fn challenge(&self) -> &C {
        &self.challenge
    }

    /// Evolves boats from `pool` until the termination condition holds.
    ///
    /// The run keeps going while fewer than `required_improvements`
    /// generations have been accepted or the best density is still above
    /// `max_density`, and stops early at `max_generations` if one is set.
    ///
    /// Each generation breeds one child per parent, adds a mutated copy of the
    /// weakest boat of the current population and scores the lot. The
    /// generation is accepted when its best boat beats the current best and
    /// holds no duplicated item; it then replaces the current population,
    /// minus its weakest member so the population size stays constant.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options do not validate
    /// - The pool runs dry while building the founding population
    /// - A boat has no volume or scores a non-finite fitness
    /// - Selection cannot sample the population
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(population = options.get_population_size(), stash = pool.len())
    )]
    pub fn run<R: ReportSink>(
        &self,
        options: &EvolutionOptions,
        pool: &mut ItemPool,
        sink: &mut R,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        options.validate()?;

        let evaluator =
            FitnessEvaluator::new(self.challenge.clone(), options.get_parallel_threshold());
        let initializer = PopulationInitializer::new(options.get_min_area());
        let mut ids = IdGenerator::new();

        let mut population: Vec<Individual> = Vec::new();
        let mut current: Option<Review> = None;
        let mut improvements = 0;
        let mut generations = 0;

        let mut step = Step::Initializing;
        loop {
            tracing::trace!(state = ?step.state(), generations, "Evolution step");
            step = match step {
                Step::Initializing => {
                    population = initializer.create_population(
                        options.get_population_size(),
                        pool,
                        &mut ids,
                        rng,
                    )?;
                    let review = evaluator.review(&mut population)?;
                    sink.report(&ProgressRecord::from_individual(
                        ReportTag::Initial,
                        &review.best,
                    )?)?;
                    tracing::info!(
                        best = review.best.id(),
                        fitness = review.best.fitness(),
                        density = review.best.density(),
                        stash = pool.len(),
                        "Initial population evaluated"
                    );
                    let next = self.next_step(options, &review, improvements, generations);
                    current = Some(review);
                    next
                }
                Step::Selecting => {
                    generations += 1;
                    Step::Recombining(self.selection_strategy.select(&population, rng)?)
                }
                Step::Recombining(selected) => {
                    let parents: Vec<&Individual> =
                        selected.iter().map(|&index| &population[index]).collect();
                    Step::Mutating(self.breed_strategy.breed(&parents, &mut ids, rng)?)
                }
                Step::Mutating(mut candidates) => {
                    let review = current_review(&current)?;
                    let mut mutant = review.worst.with_id(ids.next_id());
                    self.mutation.mutate(&mut mutant, pool, rng);
                    candidates.push(mutant);
                    Step::Evaluating(candidates)
                }
                Step::Evaluating(mut candidates) => {
                    let review = evaluator.review(&mut candidates)?;
                    Step::Comparing(candidates, review)
                }
                Step::Comparing(candidates, review) => {
                    let best = current_review(&current)?;
                    if is_improvement(&review, best) && validate(&review.best) {
                        Step::Accepted(candidates, review)
                    } else {
                        tracing::debug!(
                            generation = generations,
                            candidate = review.best.fitness(),
                            best = best.best.fitness(),
                            "Generation rejected"
                        );
                        Step::Rejected
                    }
                }
                Step::Accepted(mut candidates, review) => {
                    if let Some(index) = weakest_index(&candidates, &review) {
                        candidates.remove(index);
                    }
                    population = candidates;
                    improvements += 1;
                    sink.report(&ProgressRecord::from_individual(
                        ReportTag::Improvement,
                        &review.best,
                    )?)?;
                    tracing::info!(
                        generation = generations,
                        improvements,
                        fitness = review.best.fitness(),
                        density = review.best.density(),
                        "Generation accepted"
                    );
                    let next = self.next_step(options, &review, improvements, generations);
                    current = Some(review);
                    next
                }
                Step::Rejected => {
                    let review = current_review(&current)?;
                    self.next_step(options, review, improvements, generations)
                }
                Step::Terminated(termination) => {
                    let review = current.take().ok_or_else_boat(|| {
                        BoatError::Evolution(
                            "Run terminated without an evaluated population".to_string(),
                        )
                    })?;
                    sink.report(&ProgressRecord::from_individual(
                        ReportTag::Final,
                        &review.best,
                    )?)?;
                    tracing::info!(
                        ?termination,
                        generations,
                        improvements,
                        best = review.best.id(),
                        density = review.best.density(),
                        stash = pool.len(),
                        "Evolution finished"
                    );
                    return Ok(EvolutionResult {
                        best: review.best,
                        worst: review.worst,
                        improvements,
                        generations,
                        termination,
                    });
                }
            };
        }
    }

    /// Decides whether to breed another generation.
    fn next_step(
        &self,
        options: &EvolutionOptions,
        review: &Review,
        improvements: usize,
        generations: usize,
    ) -> Step {
        let density = review.best.density().unwrap_or(f64::INFINITY);
        let searching = improvements < options.get_required_improvements()
            || density > options.get_max_density();

        if !searching {
            Step::Terminated(Termination::Converged)
        } else if options
            .get_max_generations()
            .is_some_and(|cap| generations >= cap)
        {
            Step::Terminated(Termination::GenerationCap)
        } else {
            Step::Selecting
        }
    }
}

fn current_review(current: &Option<Review>) -> Result<&Review> {
    current.as_ref().ok_or_else_boat(|| {
        BoatError::Evolution("No population has been evaluated yet".to_string())
    })
}

/// Position of the individual to drop after an accepted generation.
///
/// When every candidate scores the same, the review's best and worst are the
/// same individual; the last one seen is dropped instead so the best survives.
fn weakest_index(candidates: &[Individual], review: &Review) -> Option<usize> {
    if review.worst.id() != review.best.id() {
        return candidates
            .iter()
            .position(|individual| individual.id() == review.worst.id());
    }
    let lowest = review.worst.fitness();
    candidates.iter().rposition(|individual| {
        individual.id() != review.best.id() && individual.fitness() == lowest
    })
}

fn is_improvement(candidate: &Review, current: &Review) -> bool {
    match (candidate.best.fitness(), current.best.fitness()) {
        (Some(candidate), Some(current)) => candidate > current,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::individual::Metrics;
    use crate::item::{Category, Item};

    fn scored(id: u64, fitness: f64) -> Individual {
        let mut individual =
            Individual::new(id, vec![Item::new(id, Category::Wood, 1.0, 1.0, 1.0)], 1);
        individual.set_metrics(Metrics {
            area: 1.0,
            total_mass: 1.0,
            total_volume: 1.0,
            density: 1.0,
            fitness,
        });
        individual
    }

    #[test]
    fn test_weakest_index_drops_worst() {
        let candidates = vec![scored(1, 2.0), scored(2, 1.0), scored(3, 3.0)];
        let review = Review {
            best: candidates[2].clone(),
            worst: candidates[1].clone(),
        };
        assert_eq!(weakest_index(&candidates, &review), Some(1));
    }

    #[test]
    fn test_equal_fitness_keeps_best() {
        let candidates = vec![scored(1, 5.0), scored(2, 5.0), scored(3, 5.0)];
        let review = Review {
            best: candidates[0].clone(),
            worst: candidates[0].clone(),
        };

        let index = weakest_index(&candidates, &review).unwrap();
        assert_eq!(index, 2);
        assert_ne!(candidates[index].id(), review.best.id());
    }

    #[test]
    fn test_single_candidate_is_kept() {
        let candidates = vec![scored(1, 5.0)];
        let review = Review {
            best: candidates[0].clone(),
            worst: candidates[0].clone(),
        };
        assert_eq!(weakest_index(&candidates, &review), None);
    }
}
