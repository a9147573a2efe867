//! Descriptions of how one vertex record is laid out in a vertex buffer.

use std::mem::size_of;

/// The component types a vertex attribute can be made of.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Float,
    UnsignedInt,
    UnsignedByte,
}

impl ElementKind {
    /// Size in bytes of one component.
    pub fn size(self) -> u32 {
        match self {
            ElementKind::Float => size_of::<f32>() as u32,
            ElementKind::UnsignedInt => size_of::<u32>() as u32,
            ElementKind::UnsignedByte => size_of::<u8>() as u32,
        }
    }

    /// Bytes are mapped into `[0, 1]` when read by the shader; everything else is passed as-is.
    pub fn normalized(self) -> bool {
        self == ElementKind::UnsignedByte
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for u32 {}
    impl Sealed for u8 {}
}

/// Rust types that can appear as a vertex attribute component.
pub trait VertexComponent: sealed::Sealed + Copy {
    const KIND: ElementKind;
}

impl VertexComponent for f32 {
    const KIND: ElementKind = ElementKind::Float;
}

impl VertexComponent for u32 {
    const KIND: ElementKind = ElementKind::UnsignedInt;
}

impl VertexComponent for u8 {
    const KIND: ElementKind = ElementKind::UnsignedByte;
}

/// One attribute of a vertex: `count` components of type `kind`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VertexElement {
    pub kind: ElementKind,
    pub count: u32,
    pub normalized: bool,
}

impl VertexElement {
    pub fn size(&self) -> u32 {
        self.count * self.kind.size()
    }
}

/// Where one element lives: its attribute slot and its byte offset inside the vertex record.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AttributeSlot {
    pub index: u32,
    pub element: VertexElement,
    pub offset: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexLayout {
    elements: Vec<VertexElement>,
    stride: u32,
}

impl VertexLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `count` components of `T` as the next attribute.
    pub fn push<T: VertexComponent>(&mut self, count: u32) -> &mut Self {
        self.push_kind(T::KIND, count)
    }

    pub fn push_kind(&mut self, kind: ElementKind, count: u32) -> &mut Self {
        let element = VertexElement {
            kind,
            count,
            normalized: kind.normalized(),
        };

        self.stride += element.size();
        self.elements.push(element);
        self
    }

    pub fn elements(&self) -> &[VertexElement] {
        &self.elements
    }

    /// Size in bytes of one whole vertex record.
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// The attribute slots in order. Slot `i` is always the `i`th pushed element.
    pub fn attributes(&self) -> impl Iterator<Item = AttributeSlot> + '_ {
        self.elements
            .iter()
            .enumerate()
            .scan(0u32, |offset, (index, element)| {
                let slot = AttributeSlot {
                    index: index as u32,
                    element: *element,
                    offset: *offset,
                };
                *offset += element.size();
                Some(slot)
            })
    }
}
