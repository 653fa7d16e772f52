use crate::field::FieldElement;
use crate::field::PrimeField;
use crate::poly::Polynomial;

#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub(crate) points: Vec<FieldElement>,
    zerofier: Polynomial,
}

impl Leaf {
    pub fn new(field: &PrimeField, points: Vec<FieldElement>) -> Self {
        let zerofier = Polynomial::zerofier(field, &points);
        Self { points, zerofier }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    zerofier: Polynomial,
    pub(crate) left: ZerofierTree,
    pub(crate) right: ZerofierTree,
}

impl Branch {
    pub fn new(left: ZerofierTree, right: ZerofierTree) -> Self {
        let zerofier = left.zerofier().naive_multiply(&right.zerofier());
        Self {
            zerofier,
            left,
            right,
        }
    }
}

/// A zerofier tree is a balanced binary tree of vanishing polynomials.
/// Conceptually, every leaf corresponds to a single point, and the value of
/// that leaf is the monic linear polynomial that evaluates to zero there and
/// no-where else. Every non-leaf node is the product of its two children.
/// In practice the tree is truncated, so every leaf holds a chunk of at most
/// [`RECURSION_CUTOFF_THRESHOLD`](Self::RECURSION_CUTOFF_THRESHOLD) points.
///
/// All nodes live in the same field; it is fixed when the tree is built.
#[derive(Debug, Clone, PartialEq)]
pub enum ZerofierTree {
    Leaf(Leaf),
    Branch(Box<Branch>),
    Padding(PrimeField),
}

impl ZerofierTree {
    /// Regulates the depth at which the tree is truncated. Phrased differently,
    /// regulates the number of points contained by each leaf.
    pub const RECURSION_CUTOFF_THRESHOLD: usize = 16;

    pub fn new_from_domain(field: &PrimeField, domain: &[FieldElement]) -> Self {
        if domain.is_empty() {
            return ZerofierTree::Padding(field.clone());
        }
        if domain.len() <= Self::RECURSION_CUTOFF_THRESHOLD {
            return ZerofierTree::Leaf(Leaf::new(field, domain.to_vec()));
        }

        let mid = domain.len() / 2;
        let left = Self::new_from_domain(field, &domain[..mid]);
        let right = Self::new_from_domain(field, &domain[mid..]);
        ZerofierTree::Branch(Box::new(Branch::new(left, right)))
    }

    pub fn zerofier(&self) -> Polynomial {
        match self {
            ZerofierTree::Leaf(leaf) => leaf.zerofier.clone(),
            ZerofierTree::Branch(branch) => branch.zerofier.clone(),
            ZerofierTree::Padding(field) => Polynomial::one(field.clone()),
        }
    }
}
