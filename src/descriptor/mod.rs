//! Parsing of `tag:name:size` operand descriptors.
//!
//! The name may itself contain colons (segment overrides and the like), so
//! the tag is everything before the first colon and the size everything after
//! the last one. The empty operand is written as plain `none`.


use anyhow::{anyhow, bail};
use tinct_operand::{Kind, Operand};

pub fn parse(descriptor: &str) -> anyhow::Result<Operand> {
    if descriptor == Kind::None.tag() {
        return Ok(Operand::none());
    }

    let Some((tag, rest)) = descriptor.split_once(':') else {
        bail!("descriptor `{descriptor}` has no tag");
    };

    let kind = Kind::from_tag(tag)
        .ok_or_else(|| anyhow!("unknown operand tag `{tag}` in `{descriptor}`"))?;

    if kind == Kind::None {
        bail!("the empty operand takes no name or size, found `{descriptor}`");
    }

    let Some((name, size)) = rest.rsplit_once(':') else {
        bail!("descriptor `{descriptor}` has no size");
    };

    if name.is_empty() {
        bail!("descriptor `{descriptor}` has no name");
    }

    Ok(Operand::new(kind, name, size))
}
