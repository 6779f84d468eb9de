pub type Result<T> = anyhow::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq)]
/// An internal, diagnostic-only representation of why a placement or
/// movement was rejected.
///
/// This never crosses the public boundary of [`crate::hive::Game`] — `place`
/// and `move_piece` report a plain `bool`, and `legal_placements` /
/// `legal_movements` report coordinate sets. Each rule in the kernel builds
/// one of these and returns it through the crate-internal `Result`; the
/// public operation that calls it converts `Err` to `false` and logs the
/// reason at `debug` level.
pub struct Error
{
    pub kind: Kind,
    pub msg: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind
{
    ReserveEmpty,
    MustPlaceQueenByMoveFour,
    TargetOccupied,
    NoFriendlyNeighbour,
    HasEnemyNeighbour,
    NotAdjacentToSoleTile,
    QueenNotPlaced,
    WrongColorToMove,
    NothingToMove,
    OneHivePrinciple,
    NotALegalDestination,
}

impl std::fmt::Display for Error
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{:?}: {}", self.kind, self.msg)
    }
}

impl Error
{
    pub fn new(kind: Kind, msg: impl Into<String>) -> Error
    {
        Error { kind, msg: msg.into() }
    }
}
