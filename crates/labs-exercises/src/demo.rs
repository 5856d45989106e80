//! Walkthrough scripts for the four collection labs
//!
//! Each script exercises one lab and prints what it expects next to what
//! the lab actually returned, for manual inspection.

use std::fmt::Display;
use std::io::Write;

use labs_collections::{GenericHolder, MapLab, Person, QueueLab, SetLab};
use labs_core::LabError;

fn shown<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "null".to_string(), |v| v.to_string())
}

fn holder_round_trip<T: Display, W: Write>(
    output: &mut W,
    value: T,
    expected: &str,
) -> Result<(), LabError> {
    let mut holder = GenericHolder::new();
    holder.load(value);

    writeln!(output, "calling 'get' method.")?;
    writeln!(output, "Expected Output: {expected}")?;
    writeln!(output, "Actual Output: {}", shown(holder.get()))?;
    Ok(())
}

/// Store and retrieve an integer, a string and a [`Person`]
///
/// # Errors
///
/// Returns `LabError::Io` if writing fails
pub fn run_generics_demo<W: Write>(output: &mut W) -> Result<(), LabError> {
    writeln!(output, "Datatype Integer...")?;
    writeln!(output, "Setting value 3 to variable 'data'.")?;
    holder_round_trip(output, 3, "3")?;

    writeln!(output, "\n\nDatatype String...")?;
    writeln!(output, "Setting value 'Revature' to variable 'data'.")?;
    holder_round_trip(output, "Revature", "Revature")?;

    writeln!(output, "\n\nDatatype Person...")?;
    holder_round_trip(
        output,
        Person::new("Alice", 30),
        "Person{name='Alice', age=30}",
    )?;
    Ok(())
}

/// Create, fill, overwrite and empty a [`MapLab`]
///
/// # Errors
///
/// Returns `LabError::Io` if writing fails
pub fn run_map_demo<W: Write>(output: &mut W) -> Result<(), LabError> {
    writeln!(
        output,
        "Was the map properly instantiated? this will print '{{}}' if yes"
    )?;
    let mut map = MapLab::new();
    writeln!(output, "{map}")?;

    writeln!(
        output,
        "If we're able to add a key/value pair to the map, then we should be able to retrieve the value from the key"
    )?;
    map.add(1, "apple");
    writeln!(output, "The value for key 1 should be 'apple':")?;
    writeln!(output, "{}", shown(map.get(1)))?;

    writeln!(output, "The size of the map should now be 1. Current size:")?;
    writeln!(output, "{}", map.len())?;

    writeln!(
        output,
        "Let's change the value of the item at key 1 to 'banana'. Current value:"
    )?;
    map.overwrite(1, "banana");
    writeln!(output, "{}", shown(map.get(1)))?;

    writeln!(
        output,
        "Let's remove the key/value pair at key 1. Current size should be 0:"
    )?;
    map.remove(1);
    writeln!(output, "{}", map.len())?;
    Ok(())
}

/// Add, check and remove items in a [`SetLab`]
///
/// # Errors
///
/// Returns `LabError::Io` if writing fails
pub fn run_set_demo<W: Write>(output: &mut W) -> Result<(), LabError> {
    writeln!(
        output,
        "Was the set properly instantiated? this will print '[]' if yes"
    )?;
    let mut set = SetLab::new();
    writeln!(output, "{set}")?;

    writeln!(
        output,
        "If we're able to add an item to the set, it should be present in the set (return true)"
    )?;
    set.add(5);
    writeln!(output, "{}", set.contains(5))?;

    writeln!(
        output,
        "The set should not contain items not in the set (return false)"
    )?;
    writeln!(output, "{}", set.contains(7))?;

    writeln!(
        output,
        "After adding the item of the set, it should have a size of 1. Current size:"
    )?;
    writeln!(output, "{}", set.len())?;

    writeln!(
        output,
        "After removing the item of the set, it should have a size of 0. Current size:"
    )?;
    set.remove(5);
    writeln!(output, "{}", set.len())?;
    Ok(())
}

/// Enqueue, dequeue and peek a [`QueueLab`]
///
/// # Errors
///
/// Returns `LabError::Io` if writing fails
pub fn run_queue_demo<W: Write>(output: &mut W) -> Result<(), LabError> {
    writeln!(
        output,
        "Was the queue properly instantiated? this will print '[]' if yes"
    )?;
    let mut queue = QueueLab::new();
    writeln!(output, "{queue}")?;

    for item in ["item 1", "item 2"] {
        writeln!(
            output,
            "Can we add '{item}' to the back of the queue? Now the values are:"
        )?;
        queue.enqueue(item);
        writeln!(output, "{queue}")?;
    }

    writeln!(
        output,
        "Can we remove an item from the front of the queue? Now the values are:"
    )?;
    queue.dequeue();
    writeln!(output, "{queue}")?;

    writeln!(
        output,
        "Can we peek the front of the queue without removing it? The value is:"
    )?;
    writeln!(output, "{}", shown(queue.peek()))?;
    Ok(())
}
