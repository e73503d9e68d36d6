use console::style;
use tinct_operand::{Operand, OperandError};

/// Print everything there is to know about an operand. Operations the operand
/// does not support are reported inline; anything else is an error.
pub fn print_operand(operand: &Operand) -> Result<(), OperandError> {
    let (shown, refused) = match operand.canonical() {
        Ok(canonical) if canonical.is_empty() => ("<none>".to_string(), None),
        Ok(canonical) => (canonical, None),
        Err(err) if is_refusal(&err) => (operand.name().to_string(), Some(err)),
        Err(err) => return Err(err),
    };

    println!(
        "{} {} ({} bits)",
        style(operand.kind().tag()).cyan().bold(),
        shown,
        operand.size_in_bits()
    );

    if let Some(err) = refused {
        print_note(&err);
    }

    println!("  var: {}", operand.is_var());
    match operand.is_mem() {
        Ok(mem) => println!("  mem: {mem}"),
        Err(err) => print_note(&err),
    }

    match operand.value() {
        Ok(value) => println!("  value: {value:#x}"),
        Err(err) if is_refusal(&err) => print_note(&err),
        Err(err) => return Err(err),
    }

    match operand.locations() {
        Ok(locations) => {
            let rendered: Vec<_> = locations.iter().map(ToString::to_string).collect();
            println!("  locations: [{}]", rendered.join(", "));
        }
        Err(err) if is_refusal(&err) => print_note(&err),
        Err(err) => return Err(err),
    }

    Ok(())
}

fn print_note(err: &OperandError) {
    println!("  {}: {err}", style("note").green());
}

/// Whether the error is the operand declining a question rather than the
/// operand being broken.
fn is_refusal(err: &OperandError) -> bool {
    matches!(
        err,
        OperandError::Unsupported { .. }
            | OperandError::UnsetValue { .. }
            | OperandError::UndefinedByteSize { .. }
            | OperandError::EmptyOperand { .. }
    )
}
