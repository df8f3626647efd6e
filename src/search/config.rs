use crate::{neighbors::DiagonalMovement, Heuristic};

/// How a found Path is post-processed.
///
/// The two techniques are not equivalent: collinearity pruning only removes waypoints that do
/// not change the route, line-of-sight shortcutting may replace several steps by one straight
/// line and thereby shorten the route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Smoothing {
    /// Every cell of the route is returned, consecutive cells are adjacent
    #[default]
    None,
    /// Drop waypoints in the middle of straight runs, keeping only the turning points
    Collinear,
    /// Drop every waypoint whose neighbors in the Path can see each other, see
    /// [`shortcut_line_of_sight`](crate::search::shortcut_line_of_sight).
    ///
    /// Unless [`diagonal`](SearchConfig::diagonal) is
    /// [`CornerCutting`](DiagonalMovement::CornerCutting), shortcuts may not pass a blocked
    /// corner either.
    LineOfSight,
}

/// Options for configuring a search
///
/// Default options:
/// ```
/// # use bitgrid_pathfinding::{prelude::*, search::Smoothing};
/// assert_eq!(
///     SearchConfig {
///         diagonal: DiagonalMovement::Never,
///         heuristic: Heuristic::Euclidean,
///         smoothing: Smoothing::None,
///         max_expansions: None,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Whether diagonal steps are allowed and whether they may cut corners
    /// (defaults to [`DiagonalMovement::Never`])
    pub diagonal: DiagonalMovement,
    /// The Heuristic estimating the remaining distance (defaults to [`Heuristic::Euclidean`]).
    ///
    /// Searches with [`Heuristic::Manhattan`] and diagonal movement are refused with
    /// [`Error::InadmissibleHeuristic`](crate::Error::InadmissibleHeuristic).
    pub heuristic: Heuristic,
    /// Post-processing of the found Path (defaults to [`Smoothing::None`])
    pub smoothing: Smoothing,
    /// `Some(n)`: give up with [`Error::BudgetExhausted`](crate::Error::BudgetExhausted) after
    /// expanding `n` Nodes.
    ///
    /// `None` (default): search until the goal is found or every reachable cell was expanded.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Only cardinal steps, no smoothing. This is the default.
    ///
    /// Values:
    /// ```
    /// # use bitgrid_pathfinding::SearchConfig;
    /// assert_eq!(SearchConfig::FOUR_WAY, SearchConfig::default());
    /// ```
    pub const FOUR_WAY: SearchConfig = SearchConfig {
        diagonal: DiagonalMovement::Never,
        heuristic: Heuristic::Euclidean,
        smoothing: Smoothing::None,
        max_expansions: None,
    };
    /// Cardinal and diagonal steps, without cutting corners
    ///
    /// Values:
    /// ```
    /// # use bitgrid_pathfinding::{prelude::*, search::Smoothing};
    /// assert_eq!(
    ///     SearchConfig {
    ///         diagonal: DiagonalMovement::NoCornerCutting,
    ///         heuristic: Heuristic::Euclidean,
    ///         smoothing: Smoothing::None,
    ///         max_expansions: None,
    ///     },
    ///     SearchConfig::EIGHT_WAY
    /// );
    /// ```
    pub const EIGHT_WAY: SearchConfig = SearchConfig {
        diagonal: DiagonalMovement::NoCornerCutting,
        heuristic: Heuristic::Euclidean,
        smoothing: Smoothing::None,
        max_expansions: None,
    };
    /// [`EIGHT_WAY`](SearchConfig::EIGHT_WAY) with line-of-sight smoothing.
    ///
    /// The shortcuts follow the same rule as the steps: no squeezing past blocked corners.
    pub const EIGHT_WAY_SMOOTH: SearchConfig = SearchConfig {
        diagonal: DiagonalMovement::NoCornerCutting,
        heuristic: Heuristic::Euclidean,
        smoothing: Smoothing::LineOfSight,
        max_expansions: None,
    };

    /// Builds a config from the classic `allow_diagonal`, `cross_corners` and `smooth` flags.
    ///
    /// `smooth` selects [`Smoothing::LineOfSight`].
    pub fn from_flags(allow_diagonal: bool, cross_corners: bool, smooth: bool) -> SearchConfig {
        SearchConfig {
            diagonal: DiagonalMovement::from_flags(allow_diagonal, cross_corners),
            smoothing: if smooth {
                Smoothing::LineOfSight
            } else {
                Smoothing::None
            },
            ..SearchConfig::FOUR_WAY
        }
    }

    /// Sets [`diagonal`](SearchConfig::diagonal)
    pub fn with_diagonal(self, diagonal: DiagonalMovement) -> SearchConfig {
        SearchConfig { diagonal, ..self }
    }

    /// Sets [`heuristic`](SearchConfig::heuristic)
    pub fn with_heuristic(self, heuristic: Heuristic) -> SearchConfig {
        SearchConfig { heuristic, ..self }
    }

    /// Sets [`smoothing`](SearchConfig::smoothing)
    pub fn with_smoothing(self, smoothing: Smoothing) -> SearchConfig {
        SearchConfig { smoothing, ..self }
    }

    /// Sets [`max_expansions`](SearchConfig::max_expansions)
    pub fn with_max_expansions(self, max_expansions: usize) -> SearchConfig {
        SearchConfig {
            max_expansions: Some(max_expansions),
            ..self
        }
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig::FOUR_WAY
    }
}
