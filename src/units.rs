#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct RowIndex(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct Width(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct Height(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct CellsCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct PassagesCount(pub usize);
