//! Decoded tables and the store that owns them.

use indexmap::IndexSet;
use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};

use argon_bytecode::{SchemaError, TypeDescriptor, Value};

/// A decoded table.
///
/// Field names and field types are appended separately (name first, then
/// type), so `field_types` may briefly lag `field_names` while a field
/// definition is in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    name: String,
    field_names: IndexSet<String>,
    field_types: Vec<TypeDescriptor>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            field_names: IndexSet::new(),
            field_types: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.field_names.iter().map(String::as_str)
    }

    pub fn field_types(&self) -> &[TypeDescriptor] {
        &self.field_types
    }

    pub fn field_count(&self) -> usize {
        self.field_names.len()
    }

    /// Column names paired with their type, `None` while the type is pending.
    pub fn columns(&self) -> impl Iterator<Item = (&str, Option<&TypeDescriptor>)> + '_ {
        self.field_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), self.field_types.get(i)))
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Whether `row` holds a value for every field.
    pub fn is_complete(&self, row: &[Value]) -> bool {
        row.len() == self.field_count()
    }

    pub(crate) fn add_field_name(&mut self, name: String) -> Result<(), SchemaError> {
        if self.field_names.contains(&name) {
            return Err(SchemaError::DuplicateField(name));
        }
        self.field_names.insert(name);
        Ok(())
    }

    pub(crate) fn add_field_type(&mut self, ty: TypeDescriptor) -> Result<(), SchemaError> {
        if self.field_types.len() >= self.field_names.len() {
            return Err(SchemaError::ColumnOverflow {
                index: self.field_types.len(),
                columns: self.field_names.len(),
            });
        }
        self.field_types.push(ty);
        Ok(())
    }

    /// Append a cell at column `index`; column 0 opens a new row.
    ///
    /// Returns the row index and the stored value.
    pub(crate) fn push_cell(
        &mut self,
        index: usize,
        value: Value,
    ) -> Result<(usize, &Value), SchemaError> {
        if index == 0 {
            self.rows.push(Vec::new());
        }
        let row_index = self.rows.len().saturating_sub(1);
        let Some(row) = self.rows.last_mut() else {
            return Err(SchemaError::MisalignedCell { index, cells: 0 });
        };
        if row.len() != index {
            return Err(SchemaError::MisalignedCell {
                index,
                cells: row.len(),
            });
        }
        row.push(value);
        Ok((row_index, &row[index]))
    }
}

impl Serialize for Table {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Table", 3)?;
        s.serialize_field("name", &self.name)?;
        s.serialize_field("fields", &Fields(self))?;
        s.serialize_field("rows", &self.rows)?;
        s.end()
    }
}

struct Fields<'a>(&'a Table);

impl Serialize for Fields<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.0.field_count()))?;
        for (name, ty) in self.0.columns() {
            seq.serialize_element(&Field {
                name,
                ty: ty.map(TypeDescriptor::name),
            })?;
        }
        seq.end()
    }
}

#[derive(Serialize)]
struct Field<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    ty: Option<&'static str>,
}

/// Ordered, append-only collection of tables.
///
/// The last table is the current one: schema and record opcodes always
/// apply to it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TableStore {
    tables: Vec<Table>,
}

impl TableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn into_tables(self) -> Vec<Table> {
        self.tables
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Most recently created table with the given name.
    pub fn get(&self, name: &str) -> Option<&Table> {
        self.tables.iter().rev().find(|t| t.name == name)
    }

    pub fn current(&self) -> Option<&Table> {
        self.tables.last()
    }

    pub(crate) fn current_mut(&mut self) -> Result<&mut Table, SchemaError> {
        self.tables.last_mut().ok_or(SchemaError::NoTable)
    }

    pub(crate) fn create_table(&mut self, name: String) -> &Table {
        self.tables.push(Table::new(name));
        &self.tables[self.tables.len() - 1]
    }
}
