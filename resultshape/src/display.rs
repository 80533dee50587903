use core::fmt;

use crate::node::{Element, NodeRef};

// `Type{elements, ...}`, or the bare type name when there are no elements.
impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ty())?;

        let elements = self.elements();
        if elements.is_empty() {
            return Ok(());
        }

        f.write_str("{")?;
        for (index, element) in elements.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            match element {
                Element::Leaf(ty) => write!(f, "{ty}")?,
                Element::Child(id) => write!(f, "{}", self.at(*id))?,
            }
        }
        f.write_str("}")
    }
}
