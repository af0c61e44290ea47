//! An in-memory [`TypeCatalog`].
//!
//! `TypeStore` is the concrete catalog used by tests and by embedders that
//! assemble class metadata by hand. [`TypeStore::with_minimal_jdk`] seeds the
//! handful of JDK-like classes the test suites build their hierarchies on.

use std::collections::HashMap;

use crate::{
    ClassDef, ClassId, ClassKind, Type, TypeCatalog, TypeParamDef, TypeVarId, WellKnownTypes,
};

#[derive(Clone, Debug)]
pub struct TypeStore {
    classes: Vec<ClassDef>,
    type_params: Vec<TypeParamDef>,
    by_name: HashMap<String, ClassId>,
    well_known: WellKnownTypes,
}

impl TypeStore {
    /// A catalog preloaded with a minimal JDK-like class graph: `Object`,
    /// the boxed primitives, `String`, the collection interfaces, and the
    /// array marker interfaces.
    pub fn with_minimal_jdk() -> Self {
        let placeholder = ClassId(0);
        let mut store = TypeStore {
            classes: Vec::new(),
            type_params: Vec::new(),
            by_name: HashMap::new(),
            well_known: WellKnownTypes {
                object: placeholder,
                string: placeholder,
                number: placeholder,
                integer: placeholder,
                boxed_void: placeholder,
                cloneable: placeholder,
                serializable: placeholder,
            },
        };

        let object = store.add_simple("java.lang.Object", ClassKind::Class, None, vec![]);
        let object_ty = Type::class(object);

        let cloneable = store.add_simple(
            "java.lang.Cloneable",
            ClassKind::Interface,
            Some(object_ty.clone()),
            vec![],
        );
        let serializable = store.add_simple(
            "java.io.Serializable",
            ClassKind::Interface,
            Some(object_ty.clone()),
            vec![],
        );
        let serializable_ty = Type::class(serializable);

        let comparable_t = store.add_type_param("T", vec![object_ty.clone()]);
        let comparable = store.add_class(ClassDef {
            name: "java.lang.Comparable".to_string(),
            kind: ClassKind::Interface,
            type_params: vec![comparable_t],
            super_class: Some(object_ty.clone()),
            interfaces: vec![],
        });
        let comparable_to = |store: &TypeStore, id: ClassId| {
            crate::parameterized(None, Type::class(comparable), vec![Type::class(id)])
        };

        let number = store.add_simple(
            "java.lang.Number",
            ClassKind::Class,
            Some(object_ty.clone()),
            vec![serializable_ty.clone()],
        );
        let number_ty = Type::class(number);

        let mut boxed = |name: &str, super_class: &Type| {
            let id = store.add_simple(
                name,
                ClassKind::Class,
                Some(super_class.clone()),
                vec![serializable_ty.clone()],
            );
            let comparable_self = comparable_to(&store, id);
            store
                .class_mut(id)
                .expect("just added")
                .interfaces
                .push(comparable_self);
            id
        };
        let integer = boxed("java.lang.Integer", &number_ty);
        boxed("java.lang.Long", &number_ty);
        boxed("java.lang.Double", &number_ty);
        boxed("java.lang.Float", &number_ty);
        boxed("java.lang.Short", &number_ty);
        boxed("java.lang.Byte", &number_ty);
        boxed("java.lang.Boolean", &object_ty);
        boxed("java.lang.Character", &object_ty);
        let string = boxed("java.lang.String", &object_ty);

        let boxed_void = store.add_simple(
            "java.lang.Void",
            ClassKind::Class,
            Some(object_ty.clone()),
            vec![],
        );

        let iterable_t = store.add_type_param("T", vec![object_ty.clone()]);
        let iterable = store.add_class(ClassDef {
            name: "java.lang.Iterable".to_string(),
            kind: ClassKind::Interface,
            type_params: vec![iterable_t],
            super_class: Some(object_ty.clone()),
            interfaces: vec![],
        });

        let collection_e = store.add_type_param("E", vec![object_ty.clone()]);
        let collection = store.add_class(ClassDef {
            name: "java.util.Collection".to_string(),
            kind: ClassKind::Interface,
            type_params: vec![collection_e],
            super_class: Some(object_ty.clone()),
            interfaces: vec![crate::parameterized(
                None,
                Type::class(iterable),
                vec![Type::Variable(collection_e)],
            )],
        });

        let list_e = store.add_type_param("E", vec![object_ty.clone()]);
        let list = store.add_class(ClassDef {
            name: "java.util.List".to_string(),
            kind: ClassKind::Interface,
            type_params: vec![list_e],
            super_class: Some(object_ty.clone()),
            interfaces: vec![crate::parameterized(
                None,
                Type::class(collection),
                vec![Type::Variable(list_e)],
            )],
        });

        let array_list_e = store.add_type_param("E", vec![object_ty.clone()]);
        store.add_class(ClassDef {
            name: "java.util.ArrayList".to_string(),
            kind: ClassKind::Class,
            type_params: vec![array_list_e],
            super_class: Some(object_ty.clone()),
            interfaces: vec![crate::parameterized(
                None,
                Type::class(list),
                vec![Type::Variable(array_list_e)],
            )],
        });

        let map_k = store.add_type_param("K", vec![object_ty.clone()]);
        let map_v = store.add_type_param("V", vec![object_ty.clone()]);
        let map = store.add_class(ClassDef {
            name: "java.util.Map".to_string(),
            kind: ClassKind::Interface,
            type_params: vec![map_k, map_v],
            super_class: Some(object_ty.clone()),
            interfaces: vec![],
        });

        let hash_map_k = store.add_type_param("K", vec![object_ty.clone()]);
        let hash_map_v = store.add_type_param("V", vec![object_ty.clone()]);
        store.add_class(ClassDef {
            name: "java.util.HashMap".to_string(),
            kind: ClassKind::Class,
            type_params: vec![hash_map_k, hash_map_v],
            super_class: Some(object_ty),
            interfaces: vec![crate::parameterized(
                None,
                Type::class(map),
                vec![Type::Variable(hash_map_k), Type::Variable(hash_map_v)],
            )],
        });

        store.well_known = WellKnownTypes {
            object,
            string,
            number,
            integer,
            boxed_void,
            cloneable,
            serializable,
        };
        store
    }

    pub fn add_class(&mut self, def: ClassDef) -> ClassId {
        let id = ClassId(u32::try_from(self.classes.len()).expect("too many classes"));
        self.by_name.insert(def.name.clone(), id);
        self.classes.push(def);
        id
    }

    /// Declare a fresh type parameter with the given upper bounds.
    pub fn add_type_param(&mut self, name: &str, upper_bounds: Vec<Type>) -> TypeVarId {
        let id = TypeVarId(u32::try_from(self.type_params.len()).expect("too many type params"));
        self.type_params.push(TypeParamDef {
            name: name.to_string(),
            upper_bounds,
        });
        id
    }

    pub fn class_mut(&mut self, id: ClassId) -> Option<&mut ClassDef> {
        self.classes.get_mut(id.0 as usize)
    }

    pub fn type_param_mut(&mut self, id: TypeVarId) -> Option<&mut TypeParamDef> {
        self.type_params.get_mut(id.0 as usize)
    }

    pub fn class_id(&self, name: &str) -> Option<ClassId> {
        self.by_name.get(name).copied()
    }

    fn add_simple(
        &mut self,
        name: &str,
        kind: ClassKind,
        super_class: Option<Type>,
        interfaces: Vec<Type>,
    ) -> ClassId {
        self.add_class(ClassDef {
            name: name.to_string(),
            kind,
            type_params: vec![],
            super_class,
            interfaces,
        })
    }
}

impl TypeCatalog for TypeStore {
    fn class(&self, id: ClassId) -> Option<&ClassDef> {
        self.classes.get(id.0 as usize)
    }

    fn type_param(&self, id: TypeVarId) -> Option<&TypeParamDef> {
        self.type_params.get(id.0 as usize)
    }

    fn lookup_class(&self, name: &str) -> Option<ClassId> {
        self.class_id(name)
    }

    fn well_known(&self) -> &WellKnownTypes {
        &self.well_known
    }
}
