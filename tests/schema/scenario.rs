use entity::sea_orm_active_enums::Rol;
use maskngo::data::{
    inventario::InventarioRepository,
    renta::{DetalleRentaRepository, RentaRepository},
};
use maskngo_test_utils::prelude::*;
use rust_decimal_macros::dec;

/// Rent one `DISNEY0000`, then delete the rental
///
/// Expect a 300.00 subtotal, and after the delete no lines while the costume keeps Stock 5.
#[tokio::test]
async fn disney_rental_round() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_schema()
        .with_mock_disfraz("DISNEY0000", 5, 0)
        .build()
        .await?;
    let cliente = test.shop().insert_mock_cliente("6181234567").await?;
    let usuario = test.shop().insert_mock_usuario("jperez", Rol::Empleado).await?;
    let renta = test
        .shop()
        .insert_mock_renta(
            cliente.id_cliente,
            usuario.id_usuario,
            maskngo::util::time::now(),
        )
        .await?;

    let detalle = test
        .shop()
        .insert_mock_detalle_renta(renta.id_renta, "DISNEY0000", 1, dec!(300.00))
        .await?;
    assert_eq!(detalle.subtotal, dec!(300.00));

    RentaRepository::new(&test.state.db)
        .delete(renta.id_renta)
        .await?;

    let detalles = DetalleRentaRepository::new(&test.state.db)
        .get_by_renta(renta.id_renta)
        .await?;
    let disfraz = InventarioRepository::new(&test.state.db)
        .get_by_codigo("DISNEY0000")
        .await?
        .unwrap();

    assert!(detalles.is_empty());
    assert_eq!(disfraz.stock, 5);
    assert_eq!(disfraz.disponible, 0);

    Ok(())
}
